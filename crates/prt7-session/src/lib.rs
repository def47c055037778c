//! # prt7-session
//!
//! PRT-7 復号セッションのコア状態機械。
//!
//! ## セッションの概要
//!
//! 送信側は同じメッセージを繰り返し送信し、送信の先頭で境界マーカー
//! （`REINICIANDO SECUENCIA`）を出す。受信側は境界マーカーごとにローターと
//! 復号バッファを作り直し、次の境界マーカー（または入力終端）で 1 つのメッセージを確定する。
//!
//! ### キーコンセプト
//!
//! - **シーケンス**: 境界マーカーで区切られた 1 回分の送信。専用のローターと復号バッファを持つ
//! - **プライミングシーケンス**: 最初の境界マーカーより前の行。送信側の状態が不明なので捨てる
//! - **継続判断**: メッセージ確定後、次のシーケンスに進むかどうかを呼び出し側が決める
//!
//! ## セッションの状態遷移
//!
//! ```text
//! AwaitingFirstSequence ──境界──► Active ──境界 (frames > 0)──► AwaitingContinueDecision
//!                                  ▲  │                              │
//!                                  │  └──境界 (frames = 0)──► Active │
//!                                  └───────────── continue ──────────┤
//!                                                                    └── stop ──► Terminated
//! Active ──入力終端──► Terminated（frames > 0 なら最終メッセージを報告）
//! ```
//!
//! 継続判断は内部で待たない。`AwaitingContinueDecision` の間に行を渡すと
//! [`SessionError::DecisionPending`] を返すので、呼び出し側は先に [`Session::decide`] を呼ぶ。

#![no_std]
extern crate alloc;

pub mod buffer;
pub mod error;
pub mod event;
pub mod session;

pub use buffer::{DecodedBuffer, DecodedSymbol};
pub use error::SessionError;
pub use event::SessionEvent;
pub use session::{Decision, Phase, Session, SessionStats};

pub use prt7_frame::BOUNDARY_MARKER;
