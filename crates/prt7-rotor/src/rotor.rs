//! 換字ホイール本体
//!
//! 円環リストを辿る代わりに、基準アルファベットに対する回転量 `offset` だけを保持する。

use crate::alphabet::{index_of, ALPHABET, ALPHABET_LEN, LETTER_COUNT, SPACE};

/// PRT-7 の換字ホイール
///
/// `offset` はホイールの「ゼロ位置」にあるシンボルの基準アルファベット上の位置。
/// 常に `0..ALPHABET_LEN` に正規化されている。
///
/// シーケンスごとに新しく作り直す（`offset = 0`）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotor {
    /// 現在の回転量（`0..27`）
    offset: usize,
}

impl Rotor {
    /// 回転していない（`offset = 0`）ローターを生成する
    pub fn new() -> Self {
        Rotor { offset: 0 }
    }

    /// ホイールを `amount` 位置だけ回す
    ///
    /// 正の値は前方、負の値は後方。大きさに制限はなく、27 を法として適用される。
    /// エラーになる入力はない。
    ///
    /// # 引数
    /// - `amount`: `M,<n>` フレームの回転量
    pub fn rotate(&mut self, amount: i64) {
        let len = ALPHABET_LEN as i64;
        // 先に amount を縮約しておけば i64 の加算はオーバーフローしない
        let step = amount.rem_euclid(len);
        self.offset = (self.offset as i64 + step).rem_euclid(len) as usize;
    }

    /// 現在の回転状態で 1 シンボルを写像する
    ///
    /// - 英字: 大文字に正規化し `(index + offset) mod 26` の英字を返す
    /// - 空白: 常に空白
    /// - それ以外: 入力をそのまま返す
    pub fn map(&self, input: char) -> char {
        if input == SPACE {
            return SPACE;
        }
        match index_of(input) {
            Some(base) if base < LETTER_COUNT => ALPHABET[(base + self.offset) % LETTER_COUNT],
            _ => input,
        }
    }

    /// 現在 `'A'` が写像される先のシンボル（診断表示用）
    pub fn current_anchor(&self) -> char {
        self.map('A')
    }

    /// ホイールのゼロ位置にある基準シンボル
    ///
    /// `offset = 26` のときは空白になる。復号には使わない。
    pub fn zero_symbol(&self) -> char {
        ALPHABET[self.offset]
    }

    /// 現在の回転量（`0..27`）
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rotor_is_identity() {
        let rotor = Rotor::new();
        assert_eq!(rotor.offset(), 0);
        for &symbol in ALPHABET.iter() {
            assert_eq!(rotor.map(symbol), symbol);
        }
    }

    #[test]
    fn test_map_load_h_at_zero() {
        assert_eq!(Rotor::new().map('H'), 'H');
    }

    #[test]
    fn test_rotate_two_maps_a_to_c() {
        let mut rotor = Rotor::new();
        rotor.rotate(2);
        assert_eq!(rotor.map('A'), 'C');
        assert_eq!(rotor.current_anchor(), 'C');
        assert_eq!(rotor.zero_symbol(), 'C');
    }

    #[test]
    fn test_map_wraps_within_letters() {
        let mut rotor = Rotor::new();
        rotor.rotate(2);
        // Z → B（空白を挟まずに英字の中で折り返す）
        assert_eq!(rotor.map('Z'), 'B');
        assert_eq!(rotor.map('Y'), 'A');
    }

    #[test]
    fn test_map_case_folds_lowercase() {
        let mut rotor = Rotor::new();
        rotor.rotate(1);
        assert_eq!(rotor.map('h'), 'I');
        assert_eq!(rotor.map('a'), 'B');
    }

    #[test]
    fn test_space_never_rotates() {
        let mut rotor = Rotor::new();
        for _ in 0..ALPHABET_LEN {
            assert_eq!(rotor.map(SPACE), SPACE);
            rotor.rotate(1);
        }
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        let mut rotor = Rotor::new();
        rotor.rotate(5);
        assert_eq!(rotor.map('7'), '7');
        assert_eq!(rotor.map('-'), '-');
        assert_eq!(rotor.map('é'), 'é');
    }

    #[test]
    fn test_negative_rotation() {
        let mut rotor = Rotor::new();
        rotor.rotate(-2);
        assert_eq!(rotor.offset(), 25);
        assert_eq!(rotor.current_anchor(), 'Z');
    }

    #[test]
    fn test_offset_26_is_identity_on_letters() {
        let mut rotor = Rotor::new();
        rotor.rotate(26);
        assert_eq!(rotor.offset(), 26);
        assert_eq!(rotor.zero_symbol(), SPACE);
        assert_eq!(rotor.current_anchor(), 'A');
        assert_eq!(rotor.map('Q'), 'Q');
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut rotor = Rotor::new();
        rotor.rotate(27);
        assert_eq!(rotor.offset(), 0);
        rotor.rotate(-54);
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        let mut rotor = Rotor::new();
        rotor.rotate(26);
        rotor.rotate(i64::MAX);
        assert!(rotor.offset() < ALPHABET_LEN);
        rotor.rotate(i64::MIN);
        assert!(rotor.offset() < ALPHABET_LEN);
    }

    #[test]
    fn test_rotations_accumulate() {
        let mut rotor = Rotor::new();
        rotor.rotate(3);
        rotor.rotate(-1);
        rotor.rotate(4);
        assert_eq!(rotor.offset(), 6);
        assert_eq!(rotor.map('A'), 'G');
    }
}
