mod components;
mod config;
mod error;
mod models;
mod utils;
mod views;

use leptos::*;
use std::rc::Rc;

use crate::components::DiagnosticsPanel;
use crate::config::ApiConfig;
use crate::models::ViewMode;
use crate::utils::log_trace::log_info;
use crate::utils::{BrowserStore, JobApiClient, LatestRequest, LikedJobsRepository, ProfileRepository, SharedStore};
use crate::views::{JobDetailsView, LikedView, ProfileView, SearchView};

// ============================================
// アプリ共通コンテキスト
// ============================================

#[derive(Clone)]
pub struct AppContext {
    pub profiles: ProfileRepository,
    pub liked_jobs: LikedJobsRepository,
    pub api: JobApiClient,
    /// 検索・詳細それぞれ最新のリクエストだけを画面に反映する
    pub search_request: LatestRequest,
    pub details_request: LatestRequest,
    pub view_mode: ReadSignal<ViewMode>,
    pub set_view_mode: WriteSignal<ViewMode>,
}

impl AppContext {
    /// 現在の画面を戻り先にして詳細画面へ
    pub fn open_job_details(&self, job_id: String) {
        let back = match self.view_mode.get_untracked() {
            ViewMode::JobDetails { back, .. } => back,
            current => Box::new(current),
        };
        self.set_view_mode.set(ViewMode::JobDetails { job_id, back });
    }
}

// ============================================
// メインアプリ（タブ切り替え）
// ============================================

#[component]
fn App() -> impl IntoView {
    let store: SharedStore = Rc::new(BrowserStore);
    let config = ApiConfig::resolve(store.as_ref());
    let (view_mode, set_view_mode) = create_signal(ViewMode::Search);

    provide_context(AppContext {
        profiles: ProfileRepository::new(store.clone()),
        liked_jobs: LikedJobsRepository::new(store),
        api: JobApiClient::new(config),
        search_request: LatestRequest::new(),
        details_request: LatestRequest::new(),
        view_mode,
        set_view_mode,
    });

    let tab_class = move |tab: ViewMode| {
        move || if view_mode.get() == tab { "active" } else { "" }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Job Finder"</h1>
                <nav class="tabs">
                    <button
                        class=tab_class(ViewMode::Search)
                        on:click=move |_| set_view_mode.set(ViewMode::Search)
                    >
                        "Jobs"
                    </button>
                    <button
                        class=tab_class(ViewMode::Liked)
                        on:click=move |_| set_view_mode.set(ViewMode::Liked)
                    >
                        "Liked Jobs"
                    </button>
                    <button
                        class=tab_class(ViewMode::Profile)
                        on:click=move |_| set_view_mode.set(ViewMode::Profile)
                    >
                        "Profile"
                    </button>
                </nav>
            </header>

            <main class="container">
                {move || match view_mode.get() {
                    ViewMode::Search => view! { <SearchView /> }.into_view(),
                    ViewMode::Liked => view! { <LikedView /> }.into_view(),
                    ViewMode::Profile => view! { <ProfileView /> }.into_view(),
                    ViewMode::JobDetails { job_id, back } => view! {
                        <JobDetailsView job_id=job_id back=*back />
                    }.into_view(),
                }}
            </main>

            <DiagnosticsPanel />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log_info("ui-action", "アプリ起動");
    mount_to_body(App);
}
