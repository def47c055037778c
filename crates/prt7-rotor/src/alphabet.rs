//! ローターの基準アルファベット
//!
//! すべての [`Rotor`](crate::Rotor) が共有する不変の並び。

/// 基準アルファベット（`A`〜`Z` の後に空白）
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ',
];

/// アルファベットのシンボル数（英字 26 + 空白 1）
pub const ALPHABET_LEN: usize = 27;

/// 換字の対象になる英字の数
pub const LETTER_COUNT: usize = 26;

/// 空白シンボル
pub const SPACE: char = ' ';

/// シンボルの基準アルファベット上の位置を返す
///
/// 英字は大文字小文字を区別しない。アルファベット外なら `None`。
pub fn index_of(symbol: char) -> Option<usize> {
    match symbol {
        'A'..='Z' => Some(symbol as usize - 'A' as usize),
        'a'..='z' => Some(symbol as usize - 'a' as usize),
        SPACE => Some(ALPHABET_LEN - 1),
        _ => None,
    }
}
