//! 求人カードコンポーネント

use gloo::timers::future::TimeoutFuture;
use leptos::*;

use crate::models::Job;
use crate::AppContext;

/// 求人カード
/// お気に入りの切り替えと詳細画面への遷移を持つ。`on_remove` を渡すと削除ボタンを表示
#[component]
pub fn JobCard(
    job: Job,
    #[prop(optional)] on_remove: Option<Callback<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let (is_liked, set_is_liked) = create_signal(ctx.liked_jobs.is_liked(&job.job_id));
    let (flash, set_flash) = create_signal(None::<&'static str>);

    let location = job.format_location();
    let salary = job.format_salary();
    let posted = job.format_posted_date();
    let preview = job.description_preview();

    let liked_jobs = ctx.liked_jobs.clone();
    let job_like = job.clone();
    let on_like = move |_: web_sys::MouseEvent| {
        let liked = liked_jobs.toggle(&job_like);
        set_is_liked.set(liked);
        // お気に入り画面ではハートの解除でもリストから外す
        if !liked {
            if let Some(cb) = on_remove {
                cb.call(job_like.job_id.clone());
            }
        }
        set_flash.set(Some(if liked { "Saved to liked jobs" } else { "Removed from liked jobs" }));
        spawn_local(async move {
            TimeoutFuture::new(2000).await;
            set_flash.set(None);
        });
    };

    let job_id_details = job.job_id.clone();
    let ctx_details = ctx.clone();
    let on_details = move |_: web_sys::MouseEvent| {
        ctx_details.open_job_details(job_id_details.clone());
    };

    let job_id_remove = job.job_id.clone();

    view! {
        <div class="job-card">
            <div class="job-card-header">
                <div class="job-card-title">
                    {job.employer_logo().map(|logo| view! {
                        <img class="employer-logo" src=logo.to_string() alt=format!("{} logo", job.employer_name()) />
                    })}
                    <div>
                        <h3>{job.title().to_string()}</h3>
                        <p class="employer">{job.employer_name().to_string()}</p>
                    </div>
                </div>
                <button
                    class=move || if is_liked.get() { "like-btn liked" } else { "like-btn" }
                    aria-label=move || if is_liked.get() { "Remove from favorites" } else { "Add to favorites" }
                    on:click=on_like
                >
                    {move || if is_liked.get() { "♥" } else { "♡" }}
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

            <p class="job-preview">{preview}"..."</p>

            {move || flash.get().map(|msg| view! { <p class="flash">{msg}</p> })}

            <div class="job-card-actions">
                <button class="details-btn" on:click=on_details>"View Details"</button>
                {on_remove.map(|cb| view! {
                    <button class="remove-btn" on:click=move |_| cb.call(job_id_remove.clone())>
                        "Remove"
                    </button>
                })}
            </div>
        </div>
    }
}
