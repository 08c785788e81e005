//! 求人検索画面
//!
//! プロフィールの希望職種があれば初期クエリとして検索する。

use leptos::*;

use crate::components::{EmptyState, ErrorNotice, JobCard, Spinner};
use crate::models::{FetchState, Job};
use crate::utils::log_trace::{log_debug, log_info};
use crate::AppContext;

#[component]
pub fn SearchView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let profile = ctx.profiles.get_profile();
    let initial_query = profile
        .as_ref()
        .map(|p| p.desired_job_title.trim().to_string())
        .filter(|q| !q.is_empty());

    let (search_input, set_search_input) = create_signal(initial_query.clone().unwrap_or_default());
    let (current_query, set_current_query) = create_signal(initial_query.clone());
    let (page, set_page) = create_signal(1u32);
    let (state, set_state) = create_signal(FetchState::<Vec<Job>>::Idle);

    // 新しい検索が始まったら古い応答は捨てる（後勝ち）
    let api = ctx.api.clone();
    let latest = ctx.search_request.clone();
    let run_search = Callback::new(move |(query, page_no): (String, u32)| {
        let ticket = latest.begin();
        let api = api.clone();
        let latest = latest.clone();
        set_state.set(FetchState::Loading);
        spawn_local(async move {
            let result = api.search_jobs(&query, page_no).await;
            if !latest.is_current(ticket) {
                log_debug("job-api", &format!("古い検索結果を破棄: {}", query));
                return;
            }
            match result {
                Ok(response) => set_state.set(FetchState::Ready(response.data)),
                Err(e) => set_state.set(FetchState::Failed(e)),
            }
        });
    });

    if let Some(query) = initial_query {
        run_search.call((query, 1));
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let query = search_input.get().trim().to_string();
        if query.is_empty() {
            return;
        }
        log_info("ui-action", &format!("検索: {}", query));
        set_current_query.set(Some(query.clone()));
        set_page.set(1);
        run_search.call((query, 1));
    };

    let go_to_page = move |page_no: u32| {
        if let Some(query) = current_query.get() {
            set_page.set(page_no);
            run_search.call((query, page_no));
        }
    };

    let on_retry = Callback::new(move |_: ()| go_to_page(page.get_untracked()));

    view! {
        <div class="search-view">
            <div class="search-header">
                <h2>{match &profile {
                    Some(p) => format!("Welcome back, {}!", p.name),
                    None => "Find Your Dream Job".to_string(),
                }}</h2>

                {profile.clone().map(|p| view! {
                    <div class="profile-banner">
                        <p><strong>"Looking for: "</strong>{p.desired_job_title}</p>
                        <p class="about">{p.about_me}</p>
                    </div>
                })}

                <form class="search-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Search for jobs (e.g., Software Engineer, Marketing Manager)"
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || search_input.get().trim().is_empty() || state.get().is_loading()
                    >
                        {move || if state.get().is_loading() { "Searching..." } else { "Search" }}
                    </button>
                </form>

                {profile.is_none().then(|| view! {
                    <div class="notice tip">
                        <p><strong>"Tip: "</strong>"Create a profile to get personalized job recommendations!"</p>
                    </div>
                })}
            </div>

            {move || match state.get() {
                FetchState::Idle => view! {
                    <EmptyState
                        title="Start your job search"
                        hint="Enter a job title or keyword to find opportunities"
                    />
                }.into_view(),
                FetchState::Loading => view! { <Spinner /> }.into_view(),
                FetchState::Failed(e) => view! {
                    <ErrorNotice
                        message="Error loading jobs. Please check your API key and try again.".to_string()
                        detail=e.to_string()
                        on_retry=on_retry
                    />
                }.into_view(),
                FetchState::Ready(jobs) if jobs.is_empty() => view! {
                    <EmptyState title="No jobs found" hint="Try adjusting your search terms" />
                    {(page.get() > 1).then(|| view! {
                        <button class="page-btn" on:click=move |_| go_to_page(page.get_untracked() - 1)>
                            "Previous page"
                        </button>
                    })}
                }.into_view(),
                FetchState::Ready(jobs) => {
                    let count = jobs.len();
                    view! {
                        <div class="results">
                            <h3 class="results-title">
                                {count} " jobs found for \"" {current_query.get().unwrap_or_default()} "\""
                            </h3>
                            <div class="job-grid">
                                {jobs.into_iter().map(|job| view! { <JobCard job=job /> }).collect_view()}
                            </div>
                            <div class="pagination">
                                <button
                                    class="page-btn"
                                    disabled=move || page.get() <= 1
                                    on:click=move |_| go_to_page(page.get_untracked().saturating_sub(1).max(1))
                                >
                                    "Previous page"
                                </button>
                                <span class="page-number">"Page " {move || page.get()}</span>
                                <button
                                    class="page-btn"
                                    on:click=move |_| go_to_page(page.get_untracked() + 1)
                                >
                                    "Next page"
                                </button>
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
