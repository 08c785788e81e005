//! お気に入り求人一覧

use leptos::*;

use crate::components::{confirm_action, JobCard};
use crate::models::ViewMode;
use crate::utils::log_trace::log_info;
use crate::AppContext;

#[component]
pub fn LikedView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let (liked, set_liked) = create_signal(ctx.liked_jobs.get_liked_jobs());
    let set_view_mode = ctx.set_view_mode;

    let repo = ctx.liked_jobs.clone();
    let on_remove = Callback::new(move |job_id: String| {
        repo.remove_liked_job(&job_id);
        set_liked.update(|jobs| jobs.retain(|job| job.job_id != job_id));
    });

    let repo = ctx.liked_jobs.clone();
    let on_clear_all = move |_: web_sys::MouseEvent| {
        if confirm_action("Are you sure you want to remove all liked jobs?") {
            log_info("ui-action", "お気に入り全件削除");
            repo.clear_all();
            set_liked.set(Vec::new());
        }
    };

    view! {
        <div class="liked-view">
            <div class="liked-header">
                <div>
                    <h2>"Liked Jobs"</h2>
                    <p class="liked-count">{move || {
                        let n = liked.get().len();
                        format!("{} job{} saved for later", n, if n == 1 { "" } else { "s" })
                    }}</p>
                </div>
                <Show when=move || !liked.get().is_empty()>
                    <button class="clear-all-btn" on:click=on_clear_all.clone()>"Clear All"</button>
                </Show>
            </div>

            {move || {
                let jobs = liked.get();
                if jobs.is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"♡"</div>
                            <h3>"No liked jobs yet"</h3>
                            <p class="empty-hint">"Start browsing jobs and click the heart icon to save them here."</p>
                            <button class="browse-btn" on:click=move |_| set_view_mode.set(ViewMode::Search)>
                                "Browse Jobs"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="job-grid">
                            {jobs.into_iter().map(|job| view! {
                                <JobCard job=job on_remove=on_remove />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
