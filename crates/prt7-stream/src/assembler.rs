//! 行アセンブラ実装

use alloc::string::String;
use alloc::vec::Vec;

use crate::DEFAULT_MAX_LINE_LEN;

/// 行アセンブラ
///
/// リンクから届いたバイト列をバッファリングし、改行コードで区切った行を返す。
///
/// ## 責任
/// - 行の途中で分割されたチャンクをつなぎ合わせる
/// - `\r` / `\n` で行を確定する（連続する改行から空行は作らない）
/// - 長すぎる行の超過分を捨てる
///
/// ## 注意
/// 行の中身は解釈しない。フレームの判定は `prt7-frame`、状態遷移は `prt7-session` が担当する。
pub struct LineAssembler {
    /// 組み立て中の行
    pending: Vec<u8>,
    /// 1 行に保持する最大バイト数
    max_line_len: usize,
    /// 現在の行で超過分を捨て始めたか（警告を 1 行 1 回にするため）
    truncating: bool,
    /// 受信した総バイト数（統計用）
    total_received: u64,
    /// 確定した行の総数（統計用）
    total_lines: u64,
    /// 長さ超過で捨てた総バイト数（統計用）
    total_dropped: u64,
}

impl LineAssembler {
    /// デフォルトの行長上限で LineAssembler を生成する
    pub fn new() -> Self {
        Self::with_max_line_len(DEFAULT_MAX_LINE_LEN)
    }

    /// 行長上限を指定して LineAssembler を生成する
    ///
    /// # 引数
    /// - `max_line_len`: 1 行に保持する最大バイト数（0 は 1 として扱う）
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        let max_line_len = max_line_len.max(1);
        LineAssembler {
            pending: Vec::with_capacity(max_line_len),
            max_line_len,
            truncating: false,
            total_received: 0,
            total_lines: 0,
            total_dropped: 0,
        }
    }

    /// 受信バイト列を積み、確定した行をすべて返す
    ///
    /// 返す行には改行コードを含まない。UTF-8 として不正なバイトは置換文字になる。
    ///
    /// # 引数
    /// - `bytes`: リンクから読んだチャンク（行の途中で切れていてよい）
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.total_received += bytes.len() as u64;
        let mut lines = Vec::new();

        for &byte in bytes {
            match byte {
                b'\r' | b'\n' => {
                    if let Some(line) = self.take_line() {
                        lines.push(line);
                    }
                }
                _ if self.pending.len() < self.max_line_len => self.pending.push(byte),
                _ => {
                    if !self.truncating {
                        tracing::warn!(
                            max_line_len = self.max_line_len,
                            "line exceeds maximum length, dropping excess bytes"
                        );
                        self.truncating = true;
                    }
                    self.total_dropped += 1;
                }
            }
        }

        lines
    }

    /// 改行で終わっていない最終行を取り出す（入力終端で呼ぶ）
    ///
    /// 組み立て中の行がなければ `None`。
    pub fn flush(&mut self) -> Option<String> {
        self.take_line()
    }

    /// 組み立て中の行があるか
    pub fn has_partial(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 組み立て中の行のバイト数
    pub fn partial_len(&self) -> usize {
        self.pending.len()
    }

    /// 1 行に保持する最大バイト数
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// 受信した総バイト数（統計用）
    pub fn total_received_bytes(&self) -> u64 {
        self.total_received
    }

    /// 確定した行の総数（統計用）
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// 長さ超過で捨てた総バイト数（統計用）
    pub fn total_dropped_bytes(&self) -> u64 {
        self.total_dropped
    }

    fn take_line(&mut self) -> Option<String> {
        self.truncating = false;
        if self.pending.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.total_lines += 1;
        Some(line)
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}
