//! # prt7-stream
//!
//! バイトストリーム → テキスト行の組み立てレイヤー
//!
//! シリアルリンク（Web Serial など）から届くバイト列は行の途中で分割されて届く。
//! このクレートはそれを PRT-7 の 1 行単位に組み立て直して上位レイヤーに渡す。
//!
//! ## 仕組み
//!
//! ```text
//! 受信:
//!   1. ホスト → assembler.push(bytes)
//!   2. '\r' または '\n' で行を確定（空行は作らない。"\r\n" は 1 行）
//!   3. 確定した行 → Session.feed_line()
//!
//! 終端:
//!   assembler.flush() で改行なしの最終行を取り出す
//! ```
//!
//! 1 行の長さには上限があり、超えたバイトは捨てて件数だけ数える。

#![no_std]
extern crate alloc;

pub mod assembler;

pub use assembler::LineAssembler;

/// 1 行に保持する最大バイト数のデフォルト値
pub const DEFAULT_MAX_LINE_LEN: usize = 255;
