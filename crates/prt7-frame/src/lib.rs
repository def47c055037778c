//! # prt7-frame
//!
//! PRT-7 のフレーム定義とテキスト行のパーサー。
//!
//! ## 行の文法
//!
//! ```text
//! Load フレーム:   L,<sym>     sym := ALPHA | "Space"（大文字小文字を区別しない）
//! Rotate フレーム: M,<int>     int := ["-" | "+"] DIGIT+
//! 境界マーカー:   "REINICIANDO SECUENCIA" を部分文字列として含む行
//! フィラー:       '-' / ' ' / '\t' のみ、または空行
//! ```
//!
//! 1 行は以下のいずれかに分類される:
//! - [`Line::Boundary`]: 送信側がシーケンスを再開した合図
//! - [`Line::Frame`]: 適用すべきフレーム
//! - [`Line::NotAFrame`]: 無視してよい行（エラーではない）
//! - [`FrameError`]: フレームの形をしているが壊れている行（報告して読み飛ばす）

#![no_std]
extern crate alloc;

pub mod error;
pub mod frame;
pub mod line;
pub mod parser;

pub use error::{FrameError, MapFrameFault};
pub use frame::Frame;
pub use line::Line;
pub use parser::{FrameParser, Parsed};

/// 送信側がシーケンスを再開したことを示す境界マーカー
pub const BOUNDARY_MARKER: &str = "REINICIANDO SECUENCIA";

/// Load フレームで空白を表すトークン（大文字小文字を区別しない）
pub const SPACE_TOKEN: &str = "space";
