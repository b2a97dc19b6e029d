/// Output formatting: pretty JSON printing and API error rendering.
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::api::ApiError;
use crate::config::EffectiveConfig;

/// Pretty-print a value as JSON to stdout (2-space indent).
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Render an API error to stdout.
///
/// Connection failures get the dedicated message: the attempted base URL in
/// text mode, or a `connection_failed` envelope carrying the command's
/// context field (`query` or `service`) under `--json`. Everything else goes
/// through the generic `Error:` / `{"error": ...}` path.
pub fn write_api_error(
    err: &ApiError,
    cfg: &EffectiveConfig,
    context_key: &str,
    context_value: &str,
) {
    if cfg.json {
        let mut envelope = serde_json::Map::new();
        if err.is_connection() {
            envelope.insert("error".to_owned(), Value::from("connection_failed"));
            envelope.insert(context_key.to_owned(), Value::from(context_value));
        } else {
            envelope.insert("error".to_owned(), Value::from(err.to_string()));
        }
        print_json(&Value::Object(envelope));
    } else if err.is_connection() {
        println!("Failed to connect to {}", cfg.base_url);
    } else {
        println!("Error: {err}");
    }
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created around the network call in `query`/`get`. Does nothing unless
/// `--debug` is set.
pub struct DebugTimer {
    label: String,
    start: Instant,
    active: bool,
}

impl DebugTimer {
    /// Start a named timer. Prints elapsed on drop only when `active` is true.
    #[must_use]
    pub fn start(label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
