//! prt7-session エラー型

use thiserror::Error;

/// セッション操作のエラー
///
/// どちらも呼び出し順の誤りで、セッションの状態は変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// 継続判断待ちの間に入力が渡された（入力は消費されていない）
    #[error("a continue/stop decision is pending; call decide() before feeding more input")]
    DecisionPending,
    /// 継続判断待ちではないのに判断が渡された
    #[error("no continue/stop decision is pending")]
    NoDecisionPending,
}
