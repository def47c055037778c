//! prt7-wasm エラー型

use prt7_session::SessionError;
use thiserror::Error;

/// デコーダーのエラー
#[derive(Debug, Error)]
pub enum DecoderError {
    /// 設定 JSON のパースに失敗
    #[error("invalid decoder config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
    /// 境界マーカーが空
    #[error("invalid decoder config: boundaryMarker must not be empty")]
    EmptyBoundaryMarker,
    /// ログレベル名が不正
    #[error("invalid log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
    /// JS から渡された行が文字列ではない
    #[error("line {0} is not a string")]
    NotAString(u32),
    /// イベント・統計の JSON 出力に失敗
    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
    /// セッション操作の順序誤り
    #[error(transparent)]
    Session(#[from] SessionError),
}
