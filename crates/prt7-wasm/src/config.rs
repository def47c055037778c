//! デコーダー設定
//!
//! ホストから JSON 文字列で渡す。すべてのキーは省略可能。
//!
//! ```json
//! {
//!   "boundaryMarker": "REINICIANDO SECUENCIA",
//!   "maxLineLength": 255,
//!   "maxPendingLines": 4096,
//!   "logLevel": "info"
//! }
//! ```

use serde::Deserialize;

use prt7_session::BOUNDARY_MARKER;
use prt7_stream::DEFAULT_MAX_LINE_LEN;

use crate::error::DecoderError;

/// 行長上限の下限（`L,A` が収まる長さ）
pub const MIN_LINE_LEN: usize = 3;

/// 継続判断待ちの間に保留する行数の既定値
pub const DEFAULT_MAX_PENDING_LINES: usize = 4096;

/// デコーダー設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DecoderConfig {
    /// 境界マーカーとして扱う部分文字列
    pub boundary_marker: String,
    /// 1 行に保持する最大バイト数（超過分は捨てる）
    pub max_line_length: usize,
    /// 継続判断待ちの間に保留できる行数（超過分は捨てる）
    pub max_pending_lines: usize,
    /// 指定するとコンストラクタでログ出力を有効にする
    pub log_level: Option<String>,
}

impl DecoderConfig {
    /// JSON 文字列から設定を読み込む
    ///
    /// `maxLineLength` は [`DecoderConfig::min_line_length`] 未満なら切り上げる。
    ///
    /// # エラー
    /// - `DecoderError::InvalidConfig`: JSON として不正、未知のキー、型の不一致
    /// - `DecoderError::EmptyBoundaryMarker`: `boundaryMarker` が空文字列
    pub fn from_json(json: &str) -> Result<Self, DecoderError> {
        let mut config: DecoderConfig =
            serde_json::from_str(json).map_err(DecoderError::InvalidConfig)?;

        if config.boundary_marker.is_empty() {
            return Err(DecoderError::EmptyBoundaryMarker);
        }
        config.max_line_length = config.max_line_length.max(config.min_line_length());
        config.max_pending_lines = config.max_pending_lines.max(1);

        Ok(config)
    }

    /// 行長上限として許す最小値
    ///
    /// 境界マーカーの行が切り詰められると境界を検出できなくなるので、
    /// マーカーのバイト数を下回らないようにする。
    pub fn min_line_length(&self) -> usize {
        MIN_LINE_LEN.max(self.boundary_marker.len())
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            boundary_marker: BOUNDARY_MARKER.to_string(),
            max_line_length: DEFAULT_MAX_LINE_LEN,
            max_pending_lines: DEFAULT_MAX_PENDING_LINES,
            log_level: None,
        }
    }
}
