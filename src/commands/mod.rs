/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod get;
pub mod manifesto;
pub mod query;
pub mod status;

use serde_json::Value;

use crate::cli::Cli;
use crate::cli::args::Command;

/// Dispatch a parsed `Command` to its handler.
///
/// Handlers report their own failures on stdout; dispatch never fails and
/// the process exits 0 either way.
pub fn dispatch(cli: &Cli) {
    match &cli.command {
        Command::Manifesto(args) => manifesto::run(args, cli),
        Command::Status(args) => status::run(args, cli),
        Command::Query(args) => query::run(args, cli),
        Command::Get(args) => get::run(args, cli),
    }
}

/// Optional-field extraction with empty-string defaulting, for rendering
/// semi-structured API documents.
pub(crate) fn field_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::field_str;

    #[test]
    fn test_field_str_present() {
        let doc = json!({ "name": "stripe" });
        assert_eq!(field_str(&doc, "name"), "stripe");
    }

    #[test]
    fn test_field_str_defaults_to_empty() {
        let doc = json!({ "name": 42 });
        assert_eq!(field_str(&doc, "name"), "");
        assert_eq!(field_str(&doc, "missing"), "");
    }
}
