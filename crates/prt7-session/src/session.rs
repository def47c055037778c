//! PRT-7 セッション状態機械
//!
//! 受信行を 1 行ずつ処理し、ローターと復号バッファの寿命（シーケンス）を管理する。
//! 1 行につき状態遷移は高々 1 回。

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use prt7_frame::{Frame, Line, BOUNDARY_MARKER};
use prt7_rotor::Rotor;

use crate::buffer::DecodedBuffer;
use crate::error::SessionError;
use crate::event::SessionEvent;

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 最初の境界マーカー待ち（プライミングシーケンス中）
    AwaitingFirstSequence,
    /// シーケンスを復号中
    Active,
    /// メッセージ確定後、継続判断待ち
    AwaitingContinueDecision,
    /// 終了（以後のイベントはすべて無視）
    Terminated,
}

impl Phase {
    /// 状態名（統計出力用）
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingFirstSequence => "awaitingFirstSequence",
            Phase::Active => "active",
            Phase::AwaitingContinueDecision => "awaitingContinueDecision",
            Phase::Terminated => "terminated",
        }
    }
}

/// 継続判断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// 次のシーケンスに進む
    Continue,
    /// セッションを終了する
    Stop,
}

/// PRT-7 復号セッション
///
/// 生きているローターと復号バッファの組を常に 1 つだけ所有する。
pub struct Session {
    phase: Phase,
    rotor: Rotor,
    buffer: DecodedBuffer,
    /// 境界マーカーとして扱う部分文字列
    marker: String,
    /// 開始したシーケンス数（プライミングは含まない）
    sequence_index: u64,
    /// 現在のシーケンスで適用したフレーム数
    frames_in_sequence: u64,
    /// 確定したメッセージ数（統計用）
    messages_completed: u64,
    /// 適用したフレームの総数（統計用）
    total_frames: u64,
    /// 壊れたフレームとして報告した行数（統計用）
    rejected_lines: u64,
    /// フレームではなかった行数（統計用）
    ignored_lines: u64,
}

impl Session {
    /// 標準の境界マーカーでセッションを生成する
    pub fn new() -> Self {
        Self::with_marker(BOUNDARY_MARKER)
    }

    /// 境界マーカーを指定してセッションを生成する
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Session {
            phase: Phase::AwaitingFirstSequence,
            rotor: Rotor::new(),
            buffer: DecodedBuffer::new(),
            marker: marker.into(),
            sequence_index: 0,
            frames_in_sequence: 0,
            messages_completed: 0,
            total_frames: 0,
            rejected_lines: 0,
            ignored_lines: 0,
        }
    }

    /// 受信した 1 行を処理する
    ///
    /// 境界マーカー・フレーム・無視する行に分類して状態機械に渡す。
    /// 壊れたフレームは [`SessionEvent::LineRejected`] として報告し、状態は変えない。
    ///
    /// # エラー
    /// - `SessionError::DecisionPending`: 継続判断待ち。行は消費していないので、
    ///   [`Session::decide`] の後にもう一度渡すこと
    pub fn feed_line(&mut self, line: &str) -> Result<Vec<SessionEvent>, SessionError> {
        match self.phase {
            Phase::Terminated => return Ok(Vec::new()),
            Phase::AwaitingContinueDecision => return Err(SessionError::DecisionPending),
            Phase::AwaitingFirstSequence | Phase::Active => {}
        }

        match Line::classify(line, &self.marker) {
            Ok(Line::Boundary) => self.boundary(),
            Ok(Line::Frame(frame)) => self.apply(frame),
            Ok(Line::NotAFrame) => {
                self.ignored_lines += 1;
                tracing::trace!(line, "ignoring non-frame line");
                Ok(vec![SessionEvent::LineIgnored])
            }
            Err(err) => {
                self.rejected_lines += 1;
                tracing::warn!(error = %err, "rejected malformed frame");
                Ok(vec![SessionEvent::LineRejected(err)])
            }
        }
    }

    /// シーケンス境界マーカーを処理する
    ///
    /// # エラー
    /// - `SessionError::DecisionPending`: 継続判断待ち
    pub fn boundary(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        match self.phase {
            Phase::Terminated => Ok(Vec::new()),
            Phase::AwaitingContinueDecision => Err(SessionError::DecisionPending),
            Phase::AwaitingFirstSequence => {
                tracing::debug!("priming sequence discarded");
                Ok(vec![self.start_sequence()])
            }
            Phase::Active if self.frames_in_sequence == 0 => {
                // 何も受信していないシーケンスは報告せずに作り直すだけ
                Ok(vec![self.start_sequence()])
            }
            Phase::Active => {
                let sequence = self.sequence_index;
                let complete = self.complete_message();
                self.phase = Phase::AwaitingContinueDecision;
                tracing::debug!(sequence, "awaiting continue decision");
                Ok(vec![complete, SessionEvent::DecisionRequired { sequence }])
            }
        }
    }

    /// パース済みのフレームを適用する
    ///
    /// プライミングシーケンス中のフレームは適用せずに捨てる。
    ///
    /// # エラー
    /// - `SessionError::DecisionPending`: 継続判断待ち
    pub fn apply(&mut self, frame: Frame) -> Result<Vec<SessionEvent>, SessionError> {
        match self.phase {
            Phase::Terminated => return Ok(Vec::new()),
            Phase::AwaitingContinueDecision => return Err(SessionError::DecisionPending),
            Phase::AwaitingFirstSequence => {
                tracing::trace!(%frame, "discarding frame from priming sequence");
                return Ok(vec![SessionEvent::FrameDiscarded { frame }]);
            }
            Phase::Active => {}
        }

        let event = match frame {
            Frame::Load(original) => {
                let decoded = self.rotor.map(original);
                self.buffer.append(original, decoded);
                tracing::debug!(
                    %original,
                    %decoded,
                    partial = %self.buffer.bracketed(),
                    "fragment decoded"
                );
                SessionEvent::SymbolDecoded {
                    original,
                    decoded,
                    text: self.buffer.decoded_text(),
                }
            }
            Frame::Rotate(amount) => {
                self.rotor.rotate(amount);
                let anchor = self.rotor.current_anchor();
                tracing::debug!(amount, %anchor, "rotor rotated");
                SessionEvent::RotorRotated { amount, anchor }
            }
        };

        self.frames_in_sequence += 1;
        self.total_frames += 1;
        Ok(vec![event])
    }

    /// 継続判断を渡す
    ///
    /// - `Continue`: 新しいシーケンスを開始して `Active` に戻る
    /// - `Stop`: `Terminated` に遷移する
    ///
    /// # エラー
    /// - `SessionError::NoDecisionPending`: 継続判断待ちではない
    pub fn decide(&mut self, decision: Decision) -> Result<Vec<SessionEvent>, SessionError> {
        if self.phase != Phase::AwaitingContinueDecision {
            return Err(SessionError::NoDecisionPending);
        }

        match decision {
            Decision::Continue => Ok(vec![self.start_sequence()]),
            Decision::Stop => Ok(vec![self.terminate()]),
        }
    }

    /// 入力終端を処理する
    ///
    /// 復号中のシーケンスにフレームがあれば最終メッセージを報告してから終了する。
    /// 継続判断待ちのメッセージは報告済みなので、もう一度は報告しない。
    pub fn end_of_input(&mut self) -> Vec<SessionEvent> {
        match self.phase {
            Phase::Terminated => Vec::new(),
            Phase::Active if self.frames_in_sequence > 0 => {
                let complete = self.complete_message();
                vec![complete, self.terminate()]
            }
            Phase::AwaitingFirstSequence | Phase::Active | Phase::AwaitingContinueDecision => {
                vec![self.terminate()]
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    pub fn buffer(&self) -> &DecodedBuffer {
        &self.buffer
    }

    /// 境界マーカーとして扱う部分文字列
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// 開始したシーケンス数（現在のシーケンスの番号、1 始まり）
    pub fn sequence_index(&self) -> u64 {
        self.sequence_index
    }

    /// 現在のシーケンスで適用したフレーム数
    pub fn frames_in_sequence(&self) -> u64 {
        self.frames_in_sequence
    }

    pub fn is_awaiting_decision(&self) -> bool {
        self.phase == Phase::AwaitingContinueDecision
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// セッション統計を返す
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            phase: self.phase,
            sequence_index: self.sequence_index,
            frames_in_sequence: self.frames_in_sequence,
            buffer_len: self.buffer.len(),
            rotor_offset: self.rotor.offset(),
            messages_completed: self.messages_completed,
            total_frames: self.total_frames,
            rejected_lines: self.rejected_lines,
            ignored_lines: self.ignored_lines,
        }
    }

    // ===== Private メソッド =====

    /// ローターと復号バッファを作り直して次のシーケンスを始める
    fn start_sequence(&mut self) -> SessionEvent {
        self.rotor = Rotor::new();
        self.buffer = DecodedBuffer::new();
        self.sequence_index += 1;
        self.frames_in_sequence = 0;
        self.phase = Phase::Active;
        tracing::info!(sequence = self.sequence_index, "sequence started");
        SessionEvent::SequenceStarted { sequence: self.sequence_index }
    }

    /// 現在のバッファからメッセージ確定イベントを作る
    fn complete_message(&mut self) -> SessionEvent {
        let text = self.buffer.decoded_text();
        self.messages_completed += 1;
        tracing::info!(
            sequence = self.sequence_index,
            frames = self.frames_in_sequence,
            text = %text,
            "hidden message assembled"
        );
        SessionEvent::MessageComplete { sequence: self.sequence_index, text }
    }

    fn terminate(&mut self) -> SessionEvent {
        self.phase = Phase::Terminated;
        tracing::info!(messages = self.messages_completed, "session terminated");
        SessionEvent::Terminated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// セッション統計情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// 現在の状態
    pub phase: Phase,
    /// 開始したシーケンス数
    pub sequence_index: u64,
    /// 現在のシーケンスで適用したフレーム数
    pub frames_in_sequence: u64,
    /// 復号バッファのシンボル数
    pub buffer_len: usize,
    /// ローターの回転量
    pub rotor_offset: usize,
    /// 確定したメッセージ数
    pub messages_completed: u64,
    /// 適用したフレームの総数
    pub total_frames: u64,
    /// 壊れたフレームとして報告した行数
    pub rejected_lines: u64,
    /// フレームではなかった行数
    pub ignored_lines: u64,
}
