//! 復号バッファ

use alloc::string::String;
use alloc::vec::Vec;

/// 受信したシンボルとその復号結果の組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// 受信したままのシンボル
    pub original: char,
    /// ローターで写像したシンボル
    pub decoded: char,
}

/// 組み立て中のメッセージ
///
/// 到着順に追記するだけのバッファ。並べ替えも削除もしない。
/// シーケンスが変わるときはバッファごと作り直す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBuffer {
    symbols: Vec<DecodedSymbol>,
}

impl DecodedBuffer {
    /// 空のバッファを生成する
    pub fn new() -> Self {
        DecodedBuffer { symbols: Vec::new() }
    }

    /// 末尾に 1 組追加する
    pub fn append(&mut self, original: char, decoded: char) {
        self.symbols.push(DecodedSymbol { original, decoded });
    }

    /// 復号済みのメッセージ（到着順）
    pub fn decoded_text(&self) -> String {
        self.symbols.iter().map(|s| s.decoded).collect()
    }

    /// 受信したままのシンボル列（到着順）
    pub fn original_text(&self) -> String {
        self.symbols.iter().map(|s| s.original).collect()
    }

    /// 途中経過の表示用（`[H][O][L]`）
    pub fn bracketed(&self) -> String {
        let mut out = String::with_capacity(self.symbols.len() * 3);
        for s in &self.symbols {
            out.push('[');
            out.push(s.decoded);
            out.push(']');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
