//! フレームパーサー
//!
//! テキスト 1 行を [`Frame`] に変換する。境界マーカーの判定は [`Line`](crate::Line) が担当する。

use alloc::string::ToString;

use prt7_rotor::{ALPHABET_LEN, SPACE};

use crate::error::{FrameError, MapFrameFault};
use crate::frame::Frame;
use crate::SPACE_TOKEN;

/// パース結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// 適用すべきフレーム
    Frame(Frame),
    /// フレームではない行（空行・フィラー・未知の先頭文字）。エラーではない
    NotAFrame,
}

/// PRT-7 フレームパーサー
pub struct FrameParser;

impl FrameParser {
    /// 1 行をパースする
    ///
    /// 末尾の `\r` / `\n` を取り除いてから判定する。
    ///
    /// # エラー
    /// - `FrameError::MalformedLoadFrame`: `L` の後にカンマがない、またはペイロードが空
    /// - `FrameError::MalformedMapFrame`: `M` の後にカンマがない、または回転量が整数ではない
    pub fn parse(line: &str) -> Result<Parsed, FrameError> {
        let line = trim_line_terminators(line);

        if is_filler(line) {
            return Ok(Parsed::NotAFrame);
        }

        let mut chars = line.chars();
        let kind = chars.next().map(|c| c.to_ascii_uppercase());
        let has_comma = chars.next() == Some(',');

        match kind {
            Some('L') => {
                if !has_comma {
                    return Err(FrameError::MalformedLoadFrame { line: line.to_string() });
                }
                parse_load(&line[2..])
                    .map(|symbol| Parsed::Frame(Frame::Load(symbol)))
                    .ok_or_else(|| FrameError::MalformedLoadFrame { line: line.to_string() })
            }
            Some('M') => {
                if !has_comma {
                    return Err(FrameError::MalformedMapFrame {
                        line: line.to_string(),
                        reason: MapFrameFault::MissingComma,
                    });
                }
                parse_rotation(&line[2..])
                    .map(|amount| Parsed::Frame(Frame::Rotate(amount)))
                    .ok_or_else(|| FrameError::MalformedMapFrame {
                        line: line.to_string(),
                        reason: MapFrameFault::InvalidInteger,
                    })
            }
            _ => Ok(Parsed::NotAFrame),
        }
    }
}

/// 末尾の改行コードを取り除く
pub(crate) fn trim_line_terminators(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == '\r' || c == '\n')
}

/// 空行、または `-` / 空白 / タブだけの行か
fn is_filler(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '-' | ' ' | '\t'))
}

/// Load ペイロードからシンボルを取り出す（空なら `None`）
fn parse_load(payload: &str) -> Option<char> {
    if payload.eq_ignore_ascii_case(SPACE_TOKEN) {
        return Some(SPACE);
    }
    payload.chars().next()
}

/// `["+" | "-"] DIGIT+` を回転量として読む
///
/// i64 に収まらない桁数は 27 を法として縮約する（符号は保持）。
/// ローターへの効果は元の値と同じになる。
fn parse_rotation(payload: &str) -> Option<i64> {
    let (negative, digits) = match payload.as_bytes().first() {
        Some(b'-') => (true, &payload[1..]),
        Some(b'+') => (false, &payload[1..]),
        _ => (false, payload),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(value) = payload.parse::<i64>() {
        return Some(value);
    }

    // 構文は正しいのでここに来るのは桁あふれのみ
    let len = ALPHABET_LEN as i64;
    let residue = digits
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')) % len);
    Some(if negative { -residue } else { residue })
}
