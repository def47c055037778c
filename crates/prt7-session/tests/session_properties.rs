//! セッションの性質テスト（proptest）

use prt7_session::{Phase, Session, SessionEvent, BOUNDARY_MARKER};
use proptest::prelude::*;

/// 境界マーカー以外の任意のフレーム行・フィラー・壊れた行
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]".prop_map(|c| format!("L,{}", c)),
        Just("L,Space".to_string()),
        (-60i64..60).prop_map(|n| format!("M,{}", n)),
        Just("----".to_string()),
        Just("L".to_string()),
        Just("M,?".to_string()),
    ]
}

proptest! {
    /// 復号テキストの長さ = 適用した Load フレームの数
    #[test]
    fn decoded_length_matches_load_count(lines in proptest::collection::vec(line_strategy(), 0..64)) {
        let mut session = Session::new();
        session.feed_line(BOUNDARY_MARKER).unwrap();

        let mut loads = 0usize;
        for line in &lines {
            for event in session.feed_line(line).unwrap() {
                if matches!(event, SessionEvent::SymbolDecoded { .. }) {
                    loads += 1;
                }
            }
        }

        prop_assert_eq!(session.buffer().decoded_text().chars().count(), loads);
        prop_assert_eq!(session.buffer().len(), loads);
    }

    /// 空白は常に空白として復号される
    #[test]
    fn space_always_decodes_to_space(lines in proptest::collection::vec(line_strategy(), 0..32)) {
        let mut session = Session::new();
        session.feed_line(BOUNDARY_MARKER).unwrap();
        for line in &lines {
            session.feed_line(line).unwrap();
        }

        let events = session.feed_line("L,Space").unwrap();
        let decoded_space = matches!(
            events.as_slice(),
            [SessionEvent::SymbolDecoded { decoded: ' ', .. }]
        );
        prop_assert!(decoded_space);
    }

    /// 入力終端では確定報告が高々 1 回で、必ず Terminated になる
    #[test]
    fn end_of_input_reports_at_most_once(lines in proptest::collection::vec(line_strategy(), 0..32)) {
        let mut session = Session::new();
        session.feed_line(BOUNDARY_MARKER).unwrap();
        for line in &lines {
            session.feed_line(line).unwrap();
        }
        let frames = session.frames_in_sequence();

        let events = session.end_of_input();
        let reports = events.iter().filter(|e| e.completed_text().is_some()).count();

        prop_assert_eq!(reports, usize::from(frames > 0));
        prop_assert_eq!(events.last(), Some(&SessionEvent::Terminated));
        prop_assert_eq!(session.phase(), Phase::Terminated);
    }
}
