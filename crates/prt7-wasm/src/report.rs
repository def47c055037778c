//! ホストに返す JSON の組み立て
//!
//! イベントは `type` タグ付きのオブジェクト（camelCase）として配列で返す。
//!
//! ```json
//! [
//!   {"type":"symbolDecoded","original":"H","decoded":"H","text":"H"},
//!   {"type":"rotorRotated","amount":2,"anchor":"C"},
//!   {"type":"messageComplete","sequence":1,"text":"HOLA"},
//!   {"type":"decisionRequired","sequence":1}
//! ]
//! ```

use serde::Serialize;

use prt7_frame::FrameError;
use prt7_session::SessionEvent;

use crate::driver::Driver;
use crate::error::DecoderError;

/// [`SessionEvent`] の JSON 表現
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventView<'a> {
    SequenceStarted {
        sequence: u64,
    },
    SymbolDecoded {
        original: char,
        decoded: char,
        text: &'a str,
    },
    RotorRotated {
        amount: i64,
        anchor: char,
    },
    FrameDiscarded {
        /// `load` / `rotate`
        kind: &'static str,
        frame: String,
    },
    LineIgnored,
    LineRejected {
        /// `malformedLoadFrame` / `malformedMapFrame`
        error: &'static str,
        line: &'a str,
        message: String,
    },
    MessageComplete {
        sequence: u64,
        text: &'a str,
    },
    DecisionRequired {
        sequence: u64,
    },
    Terminated,
}

impl<'a> From<&'a SessionEvent> for EventView<'a> {
    fn from(event: &'a SessionEvent) -> Self {
        match event {
            SessionEvent::SequenceStarted { sequence } => EventView::SequenceStarted {
                sequence: *sequence,
            },
            SessionEvent::SymbolDecoded { original, decoded, text } => EventView::SymbolDecoded {
                original: *original,
                decoded: *decoded,
                text,
            },
            SessionEvent::RotorRotated { amount, anchor } => EventView::RotorRotated {
                amount: *amount,
                anchor: *anchor,
            },
            SessionEvent::FrameDiscarded { frame } => EventView::FrameDiscarded {
                kind: if frame.is_load() { "load" } else { "rotate" },
                frame: frame.to_string(),
            },
            SessionEvent::LineIgnored => EventView::LineIgnored,
            SessionEvent::LineRejected(err) => EventView::LineRejected {
                error: error_kind(err),
                line: err.raw_line(),
                message: err.to_string(),
            },
            SessionEvent::MessageComplete { sequence, text } => EventView::MessageComplete {
                sequence: *sequence,
                text,
            },
            SessionEvent::DecisionRequired { sequence } => EventView::DecisionRequired {
                sequence: *sequence,
            },
            SessionEvent::Terminated => EventView::Terminated,
        }
    }
}

fn error_kind(err: &FrameError) -> &'static str {
    match err {
        FrameError::MalformedLoadFrame { .. } => "malformedLoadFrame",
        FrameError::MalformedMapFrame { .. } => "malformedMapFrame",
    }
}

/// イベント列を JSON 配列文字列にする
pub fn events_json(events: &[SessionEvent]) -> Result<String, DecoderError> {
    let views: Vec<EventView<'_>> = events.iter().map(EventView::from).collect();
    serde_json::to_string(&views).map_err(DecoderError::Serialize)
}

/// デコーダー統計情報
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub phase: &'static str,
    pub sequence_index: u64,
    pub frames_in_sequence: u64,
    pub buffer_len: usize,
    pub rotor_offset: usize,
    pub messages_completed: u64,
    pub total_frames: u64,
    pub rejected_lines: u64,
    pub ignored_lines: u64,
    /// 現在のシーケンスで復号したテキスト
    pub current_text: String,
    /// 現在のシーケンスで受信したままのシンボル列
    pub original_text: String,
    /// 継続判断待ちで保留している行数
    pub pending_lines: usize,
    /// 保留上限を超えて捨てた行数
    pub dropped_lines: u64,
    pub total_received_bytes: u64,
    pub total_lines: u64,
    pub total_dropped_bytes: u64,
}

impl StatsView {
    pub fn from_driver(driver: &Driver) -> Self {
        let session = driver.session().stats();
        let buffer = driver.session().buffer();
        let assembler = driver.assembler();
        StatsView {
            phase: session.phase.name(),
            sequence_index: session.sequence_index,
            frames_in_sequence: session.frames_in_sequence,
            buffer_len: session.buffer_len,
            rotor_offset: session.rotor_offset,
            messages_completed: session.messages_completed,
            total_frames: session.total_frames,
            rejected_lines: session.rejected_lines,
            ignored_lines: session.ignored_lines,
            current_text: buffer.decoded_text(),
            original_text: buffer.original_text(),
            pending_lines: driver.pending_lines(),
            dropped_lines: driver.dropped_lines(),
            total_received_bytes: assembler.total_received_bytes(),
            total_lines: assembler.total_lines(),
            total_dropped_bytes: assembler.total_dropped_bytes(),
        }
    }
}

/// 統計情報を JSON オブジェクト文字列にする
pub fn stats_json(driver: &Driver) -> Result<String, DecoderError> {
    serde_json::to_string(&StatsView::from_driver(driver)).map_err(DecoderError::Serialize)
}
