//! パーサーの性質テスト（proptest）

use prt7_frame::{Frame, FrameError, FrameParser, Line, Parsed, BOUNDARY_MARKER};
use proptest::prelude::*;

proptest! {
    /// 表示したフレームを再パースすると同じフレームに戻る
    #[test]
    fn displayed_rotate_reparses(amount in any::<i64>()) {
        let line = Frame::Rotate(amount).to_string();
        prop_assert_eq!(FrameParser::parse(&line), Ok(Parsed::Frame(Frame::Rotate(amount))));
    }

    #[test]
    fn displayed_load_reparses(c in "[A-Za-z ]") {
        let symbol = c.chars().next().unwrap();
        let line = Frame::Load(symbol).to_string();
        prop_assert_eq!(FrameParser::parse(&line), Ok(Parsed::Frame(Frame::Load(symbol))));
    }

    /// フィラーだけの行は常にフレームではない
    #[test]
    fn filler_is_never_a_frame(line in "[- \t]{0,16}") {
        prop_assert_eq!(FrameParser::parse(&line), Ok(Parsed::NotAFrame));
    }

    /// 整数以外のペイロードは 0 にならずエラーになる
    #[test]
    fn non_numeric_rotation_is_rejected(payload in "[a-zA-Z .]{1,8}") {
        let line = format!("M,{}", payload);
        let is_malformed = matches!(
            FrameParser::parse(&line),
            Err(FrameError::MalformedMapFrame { .. })
        );
        prop_assert!(is_malformed);
    }

    /// 任意の行はパニックせず、エラーには元の行が入っている
    #[test]
    fn arbitrary_lines_never_panic(line in "\\PC{0,32}") {
        match Line::classify(&line, BOUNDARY_MARKER) {
            Ok(_) => {}
            Err(err) => prop_assert!(line.starts_with(err.raw_line())),
        }
    }
}
