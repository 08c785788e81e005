//! 読み込み中・エラー・空状態の表示

use leptos::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}

/// エラー表示。`on_retry` があれば再試行ボタンを出す
#[component]
pub fn ErrorNotice(
    message: String,
    #[prop(optional)] detail: Option<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="notice error">
            <p class="notice-message">{message}</p>
            {detail.map(|d| view! { <p class="notice-detail">{d}</p> })}
            {on_retry.map(|cb| view! {
                <button class="retry-btn" on:click=move |_| cb.call(())>"Try again"</button>
            })}
        </div>
    }
}

#[component]
pub fn EmptyState(title: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-title">{title}</div>
            <p class="empty-hint">{hint}</p>
        </div>
    }
}
