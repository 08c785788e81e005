//! UIコンポーネントモジュール

pub mod diagnostics;
pub mod job_card;
pub mod status;

pub use diagnostics::DiagnosticsPanel;
pub use job_card::JobCard;
pub use status::{EmptyState, ErrorNotice, Spinner};

/// 確認ダイアログ (windowが無ければ false)
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
