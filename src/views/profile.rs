//! プロフィール作成・編集画面
//!
//! 入力チェックはこの画面で行い、通ったものだけをリポジトリに保存する。

use leptos::*;

use crate::components::confirm_action;
use crate::models::{FieldError, UserProfile, ViewMode, ABOUT_ME_LIMITS};
use crate::utils::log_trace::log_info;
use crate::AppContext;

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_view_mode = ctx.set_view_mode;
    let (existing, set_existing) = create_signal(ctx.profiles.get_profile());

    let initial = existing.get_untracked().unwrap_or_default();
    let (name, set_name) = create_signal(initial.name);
    let (job_title, set_job_title) = create_signal(initial.desired_job_title);
    let (about_me, set_about_me) = create_signal(initial.about_me);
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (attempted, set_attempted) = create_signal(false);

    let current_values = move || UserProfile {
        name: name.get(),
        desired_job_title: job_title.get(),
        about_me: about_me.get(),
    };

    // 一度送信した後は入力のたびに再チェック
    create_effect(move |_| {
        let profile = current_values();
        if attempted.get() {
            set_errors.set(profile.validate());
        }
    });

    let error_for = move |field: &'static str| {
        move || {
            errors
                .get()
                .into_iter()
                .find(|e| e.field == field)
                .map(|e| view! { <div class="field-error">{e.message}</div> })
        }
    };

    let profiles = ctx.profiles.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_attempted.set(true);
        let profile = current_values();
        let validation = profile.validate();
        if !validation.is_empty() {
            set_errors.set(validation);
            return;
        }
        profiles.save_profile(&profile);
        log_info("ui-action", "プロフィール保存");
        set_view_mode.set(ViewMode::Search);
    };

    let profiles = ctx.profiles.clone();
    let on_delete = move |_: web_sys::MouseEvent| {
        if confirm_action("Are you sure you want to delete your profile?") {
            profiles.clear_profile();
            log_info("ui-action", "プロフィール削除");
            set_existing.set(None);
            set_name.set(String::new());
            set_job_title.set(String::new());
            set_about_me.set(String::new());
            set_attempted.set(false);
            set_errors.set(Vec::new());
        }
    };

    view! {
        <div class="profile-view">
            <div class="profile-header">
                <h2>{move || if existing.get().is_some() { "Update Profile" } else { "Create Profile" }}</h2>
                <p>{move || if existing.get().is_some() {
                    "Update your information to get better job recommendations"
                } else {
                    "Tell us about yourself to get personalized job recommendations"
                }}</p>
            </div>

            <form class="profile-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="name">"Full Name *"</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {error_for("name")}
                </div>

                <div class="form-field">
                    <label for="desiredJobTitle">"Desired Job Title *"</label>
                    <input
                        type="text"
                        id="desiredJobTitle"
                        placeholder="e.g., Software Engineer, Marketing Manager, Data Analyst"
                        prop:value=move || job_title.get()
                        on:input=move |ev| set_job_title.set(event_target_value(&ev))
                    />
                    {error_for("desiredJobTitle")}
                    <p class="field-hint">"This will be used to show you relevant job recommendations"</p>
                </div>

                <div class="form-field">
                    <label for="aboutMe">"About Me *"</label>
                    <textarea
                        id="aboutMe"
                        rows="4"
                        placeholder="Tell us about your experience, skills, and what you're looking for in your next role..."
                        prop:value=move || about_me.get()
                        on:input=move |ev| set_about_me.set(event_target_value(&ev))
                    ></textarea>
                    {error_for("aboutMe")}
                    <div class="field-hint">
                        {move || about_me.get().chars().count()} "/" {ABOUT_ME_LIMITS.1} " characters"
                    </div>
                </div>

                <div class="form-actions">
                    <Show when=move || existing.get().is_some()>
                        <button type="button" class="delete-btn" on:click=on_delete.clone()>
                            "Delete Profile"
                        </button>
                    </Show>
                    <button type="button" class="cancel-btn" on:click=move |_| set_view_mode.set(ViewMode::Search)>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn">
                        {move || if existing.get().is_some() { "Update Profile" } else { "Create Profile" }}
                    </button>
                </div>
            </form>

            {move || existing.get().map(|p| view! {
                <div class="current-profile">
                    <h3>"Current Profile"</h3>
                    <p><strong>"Name: "</strong>{p.name}</p>
                    <p><strong>"Desired Job Title: "</strong>{p.desired_job_title}</p>
                    <p><strong>"About Me: "</strong>{p.about_me}</p>
                </div>
            })}

            <div class="notice tip">
                <h3>"How it works"</h3>
                <ul>
                    <li>"Your profile is stored locally in your browser"</li>
                    <li>"We'll use your desired job title to show relevant recommendations"</li>
                    <li>"You can update or delete your profile anytime"</li>
                </ul>
            </div>
        </div>
    }
}
