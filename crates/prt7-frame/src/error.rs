//! prt7-frame エラー型

use alloc::string::String;

use thiserror::Error;

/// Map フレームが不正になった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapFrameFault {
    /// `M` の直後にカンマがない
    #[error("expected ',' after 'M'")]
    MissingComma,
    /// 回転量が符号付き 10 進整数ではない
    #[error("rotation amount is not a signed decimal integer")]
    InvalidInteger,
}

/// 行のパースエラー
///
/// いずれも致命的ではない。呼び出し側は報告してその行を読み飛ばす。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// `L` で始まるがカンマまたはペイロードがない
    #[error("malformed load frame {line:?}: expected L,<symbol>")]
    MalformedLoadFrame { line: String },
    /// `M` で始まるがカンマがない、または回転量が整数ではない
    #[error("malformed map frame {line:?}: {reason}")]
    MalformedMapFrame { line: String, reason: MapFrameFault },
}

impl FrameError {
    /// エラーの原因になった行（末尾の改行は除去済み）
    pub fn raw_line(&self) -> &str {
        match self {
            FrameError::MalformedLoadFrame { line } => line,
            FrameError::MalformedMapFrame { line, .. } => line,
        }
    }
}
