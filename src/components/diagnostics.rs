//! 診断ログパネル (フッター)

use leptos::*;

use crate::utils::log_trace::{clear_logs, get_logs, get_logs_json, LogEntry};

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (entries, set_entries) = create_signal(Vec::<LogEntry>::new());
    let (raw_json, set_raw_json) = create_signal(String::new());

    // 開いた時点のログを取り込む
    let refresh = move || {
        set_entries.set(get_logs());
        set_raw_json.set(get_logs_json());
    };

    let on_toggle = move |_: web_sys::MouseEvent| {
        let next = !open.get_untracked();
        if next {
            refresh();
        }
        set_open.set(next);
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        clear_logs();
        refresh();
    };

    view! {
        <footer class="diagnostics">
            <button class="diagnostics-toggle" on:click=on_toggle>
                {move || if open.get() { "Hide diagnostics" } else { "Show diagnostics" }}
            </button>
            <Show when=move || open.get()>
                <div class="diagnostics-panel">
                    <div class="diagnostics-actions">
                        <button on:click=move |_| refresh()>"Refresh"</button>
                        <button on:click=on_clear>"Clear"</button>
                    </div>
                    <ul class="log-list">
                        {move || entries.get().into_iter().rev().map(|entry| view! {
                            <li class=format!("log-entry {}", entry.level)>
                                <span class="log-time">{entry.timestamp}</span>
                                <span class="log-category">"[" {entry.category} "]"</span>
                                <span class="log-message">{entry.message}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <details>
                        <summary>"Raw JSON"</summary>
                        <pre class="log-json">{move || raw_json.get()}</pre>
                    </details>
                </div>
            </Show>
        </footer>
    }
}
