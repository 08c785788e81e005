//! 求人詳細画面

use leptos::*;

use crate::components::{ErrorNotice, Spinner};
use crate::models::{FetchState, Job, ViewMode};
use crate::utils::log_trace::log_debug;
use crate::AppContext;

#[component]
pub fn JobDetailsView(job_id: String, back: ViewMode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_view_mode = ctx.set_view_mode;
    let (state, set_state) = create_signal(FetchState::<Option<Job>>::Idle);
    let (is_liked, set_is_liked) = create_signal(false);

    let api = ctx.api.clone();
    let latest = ctx.details_request.clone();
    let liked_jobs = ctx.liked_jobs.clone();
    let requested_id = job_id.clone();
    let load = Callback::new(move |_: ()| {
        let ticket = latest.begin();
        let api = api.clone();
        let latest = latest.clone();
        let liked_jobs = liked_jobs.clone();
        let job_id = requested_id.clone();
        set_state.set(FetchState::Loading);
        spawn_local(async move {
            let result = api.get_job_details(&job_id).await;
            if !latest.is_current(ticket) {
                log_debug("job-api", &format!("古い詳細結果を破棄: {}", job_id));
                return;
            }
            match result {
                Ok(job) => {
                    if let Some(ref j) = job {
                        set_is_liked.set(liked_jobs.is_liked(&j.job_id));
                    }
                    set_state.set(FetchState::Ready(job));
                }
                Err(e) => set_state.set(FetchState::Failed(e)),
            }
        });
    });
    load.call(());

    let on_back = move |_: web_sys::MouseEvent| set_view_mode.set(back.clone());

    let liked_jobs = ctx.liked_jobs.clone();
    let on_like = Callback::new(move |_: ()| {
        if let FetchState::Ready(Some(job)) = state.get_untracked() {
            set_is_liked.set(liked_jobs.toggle(&job));
        }
    });

    let shown_id = job_id;

    view! {
        <div class="job-details-view">
            <button class="back-btn" on:click=on_back>"← Back to jobs"</button>

            {move || match state.get() {
                FetchState::Idle | FetchState::Loading => view! { <Spinner /> }.into_view(),
                FetchState::Failed(e) => view! {
                    <ErrorNotice
                        message=format!("Error loading job details: {}", e)
                        detail=format!("Job ID: {}", shown_id)
                        on_retry=load
                    />
                }.into_view(),
                FetchState::Ready(None) => view! {
                    <div class="notice warning">
                        <p>"Job details not found or incomplete data received."</p>
                        <p class="notice-detail">"Job ID: " {shown_id.clone()}</p>
                    </div>
                }.into_view(),
                FetchState::Ready(Some(job)) => view! {
                    <JobDetailsBody job=job is_liked=is_liked on_like=on_like />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn JobDetailsBody(job: Job, is_liked: ReadSignal<bool>, on_like: Callback<()>) -> impl IntoView {
    let location = job.format_location();
    let salary = job.format_salary();
    let posted = job.format_posted_date();
    let highlights = job.highlights();
    let skills = job.required_skills();
    let benefits = job.benefits();

    view! {
        <div class="job-details">
            <div class="details-header">
                {job.employer_logo().map(|logo| view! {
                    <img class="employer-logo" src=logo.to_string() alt=format!("{} logo", job.employer_name()) />
                })}
                <div class="details-title">
                    <h2>{job.title().to_string()}</h2>
                    <p class="employer">
                        {match job.employer_website() {
                            Some(site) => view! {
                                <a href=site.to_string() target="_blank" rel="noopener">{job.employer_name().to_string()}</a>
                            }.into_view(),
                            None => job.employer_name().to_string().into_view(),
                        }}
                    </p>
                </div>
                <button
                    class=move || if is_liked.get() { "like-btn liked" } else { "like-btn" }
                    on:click=move |_| on_like.call(())
                >
                    {move || if is_liked.get() { "♥ Liked" } else { "♡ Like" }}
                </button>
            </div>

            <div class="job-meta">
                <div class="meta-row location">
                    {location}
                    {job.is_remote().then(|| view! { <span class="remote-badge">"Remote"</span> })}
                </div>
                {job.employment_type().map(|t| view! {
                    <div class="meta-row employment-type">{t.to_string()}</div>
                })}
                {salary.map(|s| view! { <div class="meta-row salary">{s}</div> })}
                {posted.map(|p| view! { <div class="meta-row posted">"Posted " {p}</div> })}
            </div>

            {job.apply_link().map(|link| view! {
                <a class="apply-btn" href=link.to_string() target="_blank" rel="noopener">"Apply Now"</a>
            })}

            <section class="details-section">
                <h3>"Job Description"</h3>
                <p class="description">{job.description().to_string()}</p>
            </section>

            {highlights.into_iter().map(|(section, items)| view! {
                <section class="details-section">
                    <h3>{section}</h3>
                    <ul>
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                </section>
            }).collect_view()}

            {(!skills.is_empty()).then(|| view! {
                <section class="details-section">
                    <h3>"Required Skills"</h3>
                    <div class="skill-tags">
                        {skills.into_iter().map(|s| view! { <span class="skill-tag">{s}</span> }).collect_view()}
                    </div>
                </section>
            })}

            {(!benefits.is_empty()).then(|| view! {
                <section class="details-section">
                    <h3>"Benefits"</h3>
                    <ul>
                        {benefits.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                    </ul>
                </section>
            })}
        </div>
    }
}
