//! PRT-7 フレーム

use core::fmt;

use prt7_rotor::SPACE;

/// 1 行から得られる PRT-7 フレーム
///
/// 一度だけ適用して捨てる値オブジェクト。他のエンティティの状態は参照しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// 暗号化されたシンボルを 1 つメッセージに追加する（`L,<sym>`）
    ///
    /// 受信したままの文字を保持する（小文字もそのまま）。
    Load(char),
    /// ローターを回転させる（`M,<n>`）
    Rotate(i64),
}

impl Frame {
    /// Load フレームか
    pub fn is_load(&self) -> bool {
        matches!(self, Frame::Load(_))
    }
}

/// ワイヤー形式（`L,H` / `L,Space` / `M,-2`）で表示する
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Load(SPACE) => write!(f, "L,Space"),
            Frame::Load(symbol) => write!(f, "L,{}", symbol),
            Frame::Rotate(amount) => write!(f, "M,{}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_wire_form() {
        assert_eq!(Frame::Load('H').to_string(), "L,H");
        assert_eq!(Frame::Load(' ').to_string(), "L,Space");
        assert_eq!(Frame::Rotate(-2).to_string(), "M,-2");
        assert_eq!(Frame::Rotate(5).to_string(), "M,5");
    }

    #[test]
    fn test_is_load() {
        assert!(Frame::Load('a').is_load());
        assert!(Frame::Load(' ').is_load());
        assert!(!Frame::Rotate(0).is_load());
    }
}
