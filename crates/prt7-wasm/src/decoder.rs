//! Prt7Decoder wasm-bindgen エクスポート
//!
//! シリアルリンクを開いたホストから呼び出すデコーダーの主エントリポイント。
//! 行組み立て・フレーム解析・ローター復号・シーケンス管理を統合する。

use wasm_bindgen::prelude::*;

use prt7_session::Decision;

use crate::config::DecoderConfig;
use crate::driver::{collect_lines, Driver};
use crate::logging;
use crate::report::{events_json, stats_json};

/// PRT-7 デコーダー
///
/// ## 内部アーキテクチャ
///
/// ```text
/// Prt7Decoder
///   └── Driver
///         ├── LineAssembler (prt7-stream)  - チャンク → 行
///         └── Session       (prt7-session) - 状態機械 + Rotor + DecodedBuffer
/// ```
///
/// すべてのメソッドは発生したイベントを JSON 配列文字列で返す。
/// 形式は [`crate::report::EventView`] を参照。
///
/// WASM はシングルスレッドのため、JS からは単一スレッドで呼び出される前提。
#[wasm_bindgen]
pub struct Prt7Decoder {
    driver: Driver,
}

#[wasm_bindgen]
impl Prt7Decoder {
    /// デコーダーを初期化する
    ///
    /// # 引数
    /// - `config_json`: 設定 JSON（省略時はすべて既定値）。
    ///   `logLevel` を指定するとログ出力も有効にする。
    ///
    /// # エラー
    /// - 設定 JSON が不正
    /// - ログレベル名が不正
    ///
    /// # 例（TypeScript）
    /// ```typescript
    /// const decoder = new Prt7Decoder();
    /// const verbose = new Prt7Decoder(JSON.stringify({ logLevel: "debug", maxLineLength: 128 }));
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Prt7Decoder, JsError> {
        let config = match config_json.as_deref() {
            Some(json) => DecoderConfig::from_json(json)
                .map_err(|e| JsError::new(&format!("{}", e)))?,
            None => DecoderConfig::default(),
        };

        if let Some(level) = config.log_level.as_deref() {
            logging::install(level).map_err(|e| JsError::new(&format!("{}", e)))?;
        }

        Ok(Prt7Decoder {
            driver: Driver::new(&config),
        })
    }

    /// リンクから読んだチャンク（生バイト）を処理する
    ///
    /// # 引数
    /// - `bytes`: `reader.read()` で得た Uint8Array。行の途中で切れていてよい。
    ///
    /// # 戻り値
    /// 発生したイベントの JSON 配列文字列
    #[wasm_bindgen(js_name = "pushBytes")]
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<String, JsError> {
        let events = self.driver.push_bytes(bytes);
        events_json(&events).map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// 組み立て済みの 1 行を処理する
    ///
    /// 改行コードを含む場合はそこで分割して複数行として扱う。
    #[wasm_bindgen(js_name = "pushLine")]
    pub fn push_line(&mut self, line: &str) -> Result<String, JsError> {
        let events = self.driver.push_line(line);
        events_json(&events).map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// 複数行をまとめて処理する
    ///
    /// 改行コードを含む要素は複数行として扱う。
    ///
    /// # エラー
    /// - 文字列以外の要素が含まれる（その場合は 1 行も処理しない）
    #[wasm_bindgen(js_name = "pushLines")]
    pub fn push_lines(&mut self, lines: js_sys::Array) -> Result<String, JsError> {
        let lines = collect_lines(lines.iter().map(|value| value.as_string()))
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        let events = self.driver.push_lines(&lines);
        events_json(&events).map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// 継続判断を渡す
    ///
    /// # 引数
    /// - `proceed`: `true` で次のシーケンスへ、`false` で終了
    ///
    /// # エラー
    /// - 継続判断待ちではない
    #[wasm_bindgen]
    pub fn decide(&mut self, proceed: bool) -> Result<String, JsError> {
        let decision = if proceed { Decision::Continue } else { Decision::Stop };
        let events = self
            .driver
            .decide(decision)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        events_json(&events).map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// リンクが閉じたことを通知する
    ///
    /// 復号中のシーケンスにフレームがあれば最終メッセージを返す。
    #[wasm_bindgen]
    pub fn finish(&mut self) -> Result<String, JsError> {
        let events = self.driver.finish();
        events_json(&events).map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// 継続判断待ちかどうか
    #[wasm_bindgen(js_name = "isAwaitingDecision")]
    pub fn is_awaiting_decision(&self) -> bool {
        self.driver.is_awaiting_decision()
    }

    /// セッションが終了したかどうか
    #[wasm_bindgen(js_name = "isTerminated")]
    pub fn is_terminated(&self) -> bool {
        self.driver.is_terminated()
    }

    /// 現在復号中のテキスト
    #[wasm_bindgen(js_name = "currentText")]
    pub fn current_text(&self) -> String {
        self.driver.session().buffer().decoded_text()
    }

    /// デバッグ用：統計情報を JSON 文字列で返す
    #[wasm_bindgen(js_name = "getStats")]
    pub fn get_stats(&self) -> Result<String, JsError> {
        stats_json(&self.driver).map_err(|e| JsError::new(&format!("{}", e)))
    }
}
