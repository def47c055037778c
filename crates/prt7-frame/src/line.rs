//! 受信行の分類
//!
//! 境界マーカーの判定をフレームのパースより先に行う。

use crate::error::FrameError;
use crate::frame::Frame;
use crate::parser::{trim_line_terminators, FrameParser, Parsed};

/// 受信した 1 行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// シーケンス境界マーカー（送信側の再開）
    Boundary,
    /// Load / Rotate フレーム
    Frame(Frame),
    /// フレームではない行
    NotAFrame,
}

impl Line {
    /// 行を分類する
    ///
    /// `marker` を部分文字列として含む行は、フレームの形をしていても境界マーカーとして扱う。
    /// 空の `marker` はどの行にも一致しない。
    ///
    /// # エラー
    /// フレームの形をしているが壊れている行は [`FrameParser::parse`] のエラーをそのまま返す。
    pub fn classify(raw: &str, marker: &str) -> Result<Line, FrameError> {
        if !marker.is_empty() && trim_line_terminators(raw).contains(marker) {
            return Ok(Line::Boundary);
        }

        Ok(match FrameParser::parse(raw)? {
            Parsed::Frame(frame) => Line::Frame(frame),
            Parsed::NotAFrame => Line::NotAFrame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOUNDARY_MARKER;

    #[test]
    fn test_boundary_marker_substring() {
        assert_eq!(
            Line::classify("REINICIANDO SECUENCIA", BOUNDARY_MARKER),
            Ok(Line::Boundary)
        );
        assert_eq!(
            Line::classify("--- REINICIANDO SECUENCIA ---\r\n", BOUNDARY_MARKER),
            Ok(Line::Boundary)
        );
    }

    #[test]
    fn test_boundary_is_case_sensitive() {
        assert_eq!(
            Line::classify("reiniciando secuencia", BOUNDARY_MARKER),
            Ok(Line::NotAFrame)
        );
    }

    #[test]
    fn test_boundary_wins_over_frame_shape() {
        assert_eq!(
            Line::classify("L,REINICIANDO SECUENCIA", BOUNDARY_MARKER),
            Ok(Line::Boundary)
        );
    }

    #[test]
    fn test_frames_and_filler_pass_through() {
        assert_eq!(Line::classify("L,H", BOUNDARY_MARKER), Ok(Line::Frame(Frame::Load('H'))));
        assert_eq!(Line::classify("M,-3", BOUNDARY_MARKER), Ok(Line::Frame(Frame::Rotate(-3))));
        assert_eq!(Line::classify("----", BOUNDARY_MARKER), Ok(Line::NotAFrame));
    }

    #[test]
    fn test_errors_are_propagated() {
        assert!(matches!(
            Line::classify("L", BOUNDARY_MARKER),
            Err(FrameError::MalformedLoadFrame { .. })
        ));
    }

    #[test]
    fn test_custom_and_empty_marker() {
        assert_eq!(Line::classify("## RESET ##", "RESET"), Ok(Line::Boundary));
        assert_eq!(Line::classify("", ""), Ok(Line::NotAFrame));
        assert_eq!(Line::classify("L,A", ""), Ok(Line::Frame(Frame::Load('A'))));
    }
}
