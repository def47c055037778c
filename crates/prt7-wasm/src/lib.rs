//! # prt7-wasm
//!
//! wasm-bindgen エクスポート：Web Serial などでリンクを開いたホスト（ブラウザ / Node.js）から呼び出す公開 API。
//!
//! ## 使用方法（TypeScript）
//!
//! ```typescript
//! import { Prt7Decoder, initPanicHook } from '../prt7-wasm-pkg/prt7_wasm';
//!
//! // パニック時のスタックトレースを有効化（開発時）
//! initPanicHook();
//!
//! // デコーダー初期化（設定は省略可）
//! const decoder = new Prt7Decoder(JSON.stringify({ logLevel: "info" }));
//!
//! // シリアルポートから読んだチャンクを渡す
//! for (const event of JSON.parse(decoder.pushBytes(chunk))) {
//!     render(event);
//! }
//!
//! // メッセージ確定後は継続判断が必要
//! if (decoder.isAwaitingDecision()) {
//!     const events = decoder.decide(window.confirm("¿Continuar con la siguiente secuencia?"));
//! }
//!
//! // リンクが閉じたら入力終端
//! const last = decoder.finish();
//! ```

use wasm_bindgen::prelude::*;

pub mod config;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod logging;
pub mod report;

pub use config::DecoderConfig;
pub use decoder::Prt7Decoder;
pub use driver::{decode_transcript, Driver};
pub use error::DecoderError;

/// パニック時にブラウザコンソールにスタックトレースを出力する
///
/// 開発時に必ず呼び出すこと。本番ビルドでは feature flag で無効化可能。
#[wasm_bindgen(js_name = "initPanicHook")]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// tracing のイベントをブラウザコンソールに出力する
///
/// 2 回目以降の呼び出しは何もしない。
///
/// # 引数
/// - `level`: `"trace"` / `"debug"` / `"info"` / `"warn"` / `"error"`（省略時は `"info"`）
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    logging::install(level.as_deref().unwrap_or(logging::DEFAULT_LEVEL))
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok(())
}

/// 記録済みの送信内容をまとめて復号する
///
/// テスト・デバッグ用。継続判断はすべて「継続」として扱い、確定したメッセージを
/// JSON 文字列の配列で返す。プライミングシーケンスは含まない。
///
/// # 引数
/// - `transcript`: 改行区切りの受信ログ
#[wasm_bindgen(js_name = "decodeTranscript")]
pub fn decode_transcript_js(transcript: &str) -> Result<String, JsError> {
    let messages = decode_transcript(transcript, &DecoderConfig::default())
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    serde_json::to_string(&messages).map_err(|e| JsError::new(&format!("{}", e)))
}
