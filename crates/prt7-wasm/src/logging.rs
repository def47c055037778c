//! ログ出力
//!
//! コアクレートが発行する tracing イベントを 1 行に整形してコンソールに出す。
//! wasm32 ではブラウザの `console.*`、それ以外（native テスト）では標準エラー出力。

use std::fmt::{self, Write as _};
use std::str::FromStr;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

use crate::error::DecoderError;

/// `initLogging` でレベルを省略したときの既定値
pub const DEFAULT_LEVEL: &str = "info";

/// ログレベル名をパースする
///
/// # エラー
/// - `DecoderError::InvalidLogLevel`: 不明なレベル名
pub fn parse_level(level: &str) -> Result<Level, DecoderError> {
    Level::from_str(level.trim()).map_err(|_| DecoderError::InvalidLogLevel(level.to_string()))
}

/// コンソール出力の subscriber をグローバルに登録する
///
/// 既に登録済みなら何もせず `Ok(false)` を返す。
///
/// # エラー
/// - `DecoderError::InvalidLogLevel`: 不明なレベル名
pub fn install(level: &str) -> Result<bool, DecoderError> {
    let level = parse_level(level)?;
    let installed = Registry::default()
        .with(ConsoleLayer.with_filter(LevelFilter::from_level(level)))
        .try_init()
        .is_ok();
    Ok(installed)
}

/// イベントを 1 行に整形してコンソールに出す Layer
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLayer;

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = visitor.format(metadata.level(), metadata.target());
        emit(metadata.level(), &line);
    }
}

/// イベントのフィールドを `message key=value ...` の形に集める
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl FieldVisitor {
    fn record(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name(), value));
        }
    }

    /// `LEVEL target: message key=value ...`
    fn format(&self, level: &Level, target: &str) -> String {
        let mut line = format!("{:>5} {}:", level.as_str(), target);
        if let Some(message) = &self.message {
            let _ = write!(line, " {}", message);
        }
        for (name, value) in &self.fields {
            let _ = write!(line, " {}={}", name, value);
        }
        line
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record(field, value.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    if *level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if *level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if *level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{}", line);
}
