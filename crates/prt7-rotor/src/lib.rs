//! # prt7-rotor
//!
//! PRT-7 の換字ホイール（ローター）。
//!
//! ## ローターの概要
//!
//! 送信側は `A`〜`Z` と空白の 27 シンボルを円環状に並べたホイールを回しながら
//! 1 文字ずつ暗号化する（動的シーザー暗号）。受信側は同じホイールを
//! `M,<n>` フレームに従って回転させ、`L,<c>` フレームの文字を写像して復号する。
//!
//! ```text
//! offset = 0:  A B C D ... Z ␣      'A' → 'A'
//! offset = 2:  C D E F ... ␣ A B    'A' → 'C'
//! ```
//!
//! ### 写像の規則
//!
//! - 英字は大文字に正規化してから `(index + offset) mod 26` の英字へ写す
//! - 空白はどの回転状態でも空白のまま（単語境界を保つ）
//! - アルファベット外の文字は変換せずにそのまま返す
//!
//! 回転状態は整数 `offset` ひとつだけで表現するので、回転も写像も O(1)。

#![no_std]

pub mod alphabet;
pub mod rotor;

pub use alphabet::{index_of, ALPHABET, ALPHABET_LEN, LETTER_COUNT, SPACE};
pub use rotor::Rotor;
