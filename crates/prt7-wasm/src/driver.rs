//! 受信バイト列からセッションまでのパイプライン
//!
//! ```text
//! bytes ──▶ LineAssembler ──▶ backlog ──▶ Session ──▶ Vec<SessionEvent>
//!                               ▲            │
//!                               └── 継続判断待ちの間は保留
//! ```
//!
//! 継続判断待ちの間に届いた行は backlog に溜めておき、[`Driver::decide`] の後で
//! 順に処理する。入力終端も backlog を処理し切るまで遅らせる。

use std::collections::VecDeque;

use prt7_session::{Decision, Session, SessionEvent};
use prt7_stream::LineAssembler;

use crate::config::DecoderConfig;
use crate::error::DecoderError;

/// 行組み立てとセッションをつなぐドライバー
pub struct Driver {
    /// バイト列 → 行
    assembler: LineAssembler,
    /// 復号状態機械
    session: Session,
    /// 継続判断待ちで処理を保留している行
    backlog: VecDeque<String>,
    /// backlog に保持する最大行数
    max_pending: usize,
    /// backlog が一杯で捨てた行数
    dropped_lines: u64,
    /// 現在の判断待ちの間に既に警告したか
    overflowing: bool,
    /// `finish` が呼ばれたが backlog が残っている
    eof_pending: bool,
}

impl Driver {
    pub fn new(config: &DecoderConfig) -> Self {
        let max_line_len = config.max_line_length.max(config.min_line_length());
        Driver {
            assembler: LineAssembler::with_max_line_len(max_line_len),
            session: Session::with_marker(config.boundary_marker.clone()),
            backlog: VecDeque::new(),
            max_pending: config.max_pending_lines.max(1),
            dropped_lines: 0,
            overflowing: false,
            eof_pending: false,
        }
    }

    /// 受信チャンクを渡す
    ///
    /// チャンクは行の途中で切れていてもよい。完成した行だけを処理する。
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Vec<SessionEvent> {
        if self.session.is_terminated() || self.eof_pending {
            return Vec::new();
        }
        let lines = self.assembler.push(bytes);
        self.accept(lines)
    }

    /// 組み立て済みの行を渡す
    ///
    /// 改行コードを含む場合はそこで分割し、複数行として処理する。
    pub fn push_line(&mut self, line: &str) -> Vec<SessionEvent> {
        self.push_lines(&[line])
    }

    /// 組み立て済みの行をまとめて渡す
    pub fn push_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<SessionEvent> {
        if self.session.is_terminated() || self.eof_pending {
            return Vec::new();
        }
        let split = lines
            .iter()
            .flat_map(|line| line.as_ref().split(|c: char| c == '\r' || c == '\n'))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        self.accept(split)
    }

    /// 継続判断を渡し、保留していた行を処理する
    ///
    /// # エラー
    /// - `DecoderError::Session`: 継続判断待ちではない
    pub fn decide(&mut self, decision: Decision) -> Result<Vec<SessionEvent>, DecoderError> {
        let mut events = self.session.decide(decision)?;
        events.extend(self.pump());
        Ok(events)
    }

    /// 入力終端を通知する
    ///
    /// 途中までの行があれば 1 行として処理する。継続判断待ちなら終端処理は
    /// [`Driver::decide`] の後まで遅らせる。
    pub fn finish(&mut self) -> Vec<SessionEvent> {
        if self.eof_pending || self.session.is_terminated() {
            return Vec::new();
        }
        if let Some(line) = self.assembler.flush() {
            self.backlog.push_back(line);
        }
        self.eof_pending = true;
        self.pump()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn assembler(&self) -> &LineAssembler {
        &self.assembler
    }

    /// 継続判断待ちで保留している行数
    pub fn pending_lines(&self) -> usize {
        self.backlog.len()
    }

    /// 保留上限を超えて捨てた行数
    pub fn dropped_lines(&self) -> u64 {
        self.dropped_lines
    }

    pub fn is_awaiting_decision(&self) -> bool {
        self.session.is_awaiting_decision()
    }

    pub fn is_terminated(&self) -> bool {
        self.session.is_terminated()
    }

    // ===== Private メソッド =====

    /// 1 行ずつ backlog に積んで処理する
    ///
    /// backlog に行が残るのは継続判断待ちの間（と終端処理待ち）だけ。
    fn accept(&mut self, lines: Vec<String>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for line in lines {
            if self.session.is_terminated() {
                break;
            }
            self.enqueue(line);
            events.extend(self.pump());
        }
        events
    }

    fn enqueue(&mut self, line: String) {
        if self.backlog.len() < self.max_pending {
            self.backlog.push_back(line);
            return;
        }
        if !self.overflowing {
            tracing::warn!(
                max_pending = self.max_pending,
                "too many lines while awaiting decision, dropping newest"
            );
            self.overflowing = true;
        }
        self.dropped_lines += 1;
    }

    /// 継続判断待ちになるまで backlog を処理する
    fn pump(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        while !self.session.is_awaiting_decision() {
            let Some(line) = self.backlog.pop_front() else {
                break;
            };
            match self.session.feed_line(&line) {
                Ok(produced) => events.extend(produced),
                Err(_) => {
                    self.backlog.push_front(line);
                    break;
                }
            }
        }

        if self.backlog.is_empty() {
            self.overflowing = false;
        }

        if self.session.is_terminated() {
            if !self.backlog.is_empty() {
                tracing::debug!(lines = self.backlog.len(), "dropping lines after termination");
            }
            self.backlog.clear();
            self.eof_pending = false;
        } else if self.eof_pending && self.backlog.is_empty() && !self.session.is_awaiting_decision()
        {
            events.extend(self.session.end_of_input());
            self.eof_pending = false;
        }

        events
    }
}

/// ホストから受け取った値の列を行の列に変換する
///
/// 1 つでも文字列でない値があれば 1 行も返さない。途中まで処理してから
/// 失敗すると、その間に発生したイベントをホストに返せなくなるため。
///
/// # エラー
/// - `DecoderError::NotAString`: 文字列でない最初の値の位置
pub fn collect_lines<I>(values: I) -> Result<Vec<String>, DecoderError>
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| value.ok_or(DecoderError::NotAString(i as u32)))
        .collect()
}

/// 記録済みの送信内容をまとめて復号する
///
/// 継続判断はすべて `Continue` とし、確定したメッセージを順に返す。
///
/// # エラー
/// - `DecoderError::Session`: 内部の呼び出し順序が崩れた場合
pub fn decode_transcript(
    transcript: &str,
    config: &DecoderConfig,
) -> Result<Vec<String>, DecoderError> {
    let mut driver = Driver::new(config);
    let mut messages = Vec::new();

    let mut events = driver.push_bytes(transcript.as_bytes());
    loop {
        messages.extend(events.iter().filter_map(|e| e.completed_text().map(str::to_string)));
        if driver.is_awaiting_decision() {
            events = driver.decide(Decision::Continue)?;
        } else {
            break;
        }
    }

    let mut events = driver.finish();
    loop {
        messages.extend(events.iter().filter_map(|e| e.completed_text().map(str::to_string)));
        if driver.is_awaiting_decision() {
            events = driver.decide(Decision::Continue)?;
        } else {
            break;
        }
    }

    Ok(messages)
}
