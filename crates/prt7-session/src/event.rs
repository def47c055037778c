//! セッションが呼び出し側に報告するイベント

use alloc::string::String;

use prt7_frame::{Frame, FrameError};

/// セッションの出力
///
/// 表示形式は呼び出し側が決める。ここで保証するのは内容のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// 新しいシーケンスが始まった（ローターと復号バッファを作り直した）
    SequenceStarted { sequence: u64 },
    /// Load フレームを適用した
    SymbolDecoded {
        original: char,
        decoded: char,
        /// このシーケンスでここまでに復号したメッセージ全体
        text: String,
    },
    /// Rotate フレームを適用した
    RotorRotated {
        amount: i64,
        /// 回転後に `'A'` が写像される先
        anchor: char,
    },
    /// プライミングシーケンス中のフレーム（パースしたが適用しない）
    FrameDiscarded { frame: Frame },
    /// フレームではない行
    LineIgnored,
    /// 壊れたフレーム（報告のみ。状態は変わらない）
    LineRejected(FrameError),
    /// シーケンスのメッセージが確定した
    MessageComplete { sequence: u64, text: String },
    /// 継続するかどうかの判断が必要（[`Session::decide`](crate::Session::decide) を呼ぶ）
    DecisionRequired { sequence: u64 },
    /// セッションが終了した
    Terminated,
}

impl SessionEvent {
    /// 確定したメッセージを持つイベントならその本文を返す
    pub fn completed_text(&self) -> Option<&str> {
        match self {
            SessionEvent::MessageComplete { text, .. } => Some(text),
            _ => None,
        }
    }
}
