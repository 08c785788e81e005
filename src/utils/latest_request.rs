//! 後勝ちリクエスト管理
//!
//! 同じ画面で新しい検索が始まったら、古いリクエストの応答は表示に反映しない。

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    counter: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいリクエストを発行 (それ以前のチケットは無効になる)
    pub fn begin(&self) -> RequestTicket {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.counter.get() == ticket.0
    }
}
