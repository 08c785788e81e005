//! エラー型

use thiserror::Error;

/// 永続ストア (localStorage) 関連のエラー
///
/// リポジトリ層で安全なデフォルト値に畳み込まれ、呼び出し側には伝播しない。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// 実行コンテキストにストアが存在しない
    #[error("persistent storage is not available in this context")]
    Unavailable,

    /// 保存値がJSONとして読めない、または形が合わない
    #[error("stored value for `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// 書き込み失敗 (容量超過など)
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// 求人APIの呼び出しエラー
///
/// ストアエラーと違い、こちらは必ず呼び出し側へ返す。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("could not build request: {0}")]
    Request(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Corrupt {
            key: "likedJobs".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "stored value for `likedJobs` is corrupt: expected value"
        );
        assert_eq!(
            ApiError::Upstream { status: 429 }.to_string(),
            "upstream returned HTTP 429"
        );
    }
}
