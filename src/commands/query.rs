/// `query` command: search for worldbooks.
use serde_json::Value;

use super::field_str;
use crate::api::{ApiClient, ApiError};
use crate::cli::Cli;
use crate::cli::args::QueryArgs;
use crate::cli::output::{DebugTimer, print_json, write_api_error};
use crate::config::{EffectiveConfig, Overrides};

/// Run `worldbook query`.
pub fn run(args: &QueryArgs, cli: &Cli) {
    let cfg = EffectiveConfig::from_env(
        Overrides {
            json: args.json,
            base_url: args.base_url.as_deref(),
        },
        Overrides {
            json: cli.json,
            base_url: cli.base_url.as_deref(),
        },
    );
    let client = ApiClient::new(cfg.base_url.clone());

    let params = [
        ("q", Some(args.query.clone())),
        ("limit", Some(args.limit.to_string())),
        ("offset", Some(args.offset.to_string())),
        ("category", args.category.clone()),
    ];

    let timer = DebugTimer::start("GET /api/search", cli.debug);
    let outcome = client.get_json("/api/search", &params);
    drop(timer);

    let response = match outcome {
        Ok(response) if response.is_success() => response,
        Ok(response) => {
            let err = ApiError::HttpStatus {
                status_code: response.status_code,
            };
            write_api_error(&err, &cfg, "query", &args.query);
            return;
        }
        Err(err) => {
            write_api_error(&err, &cfg, "query", &args.query);
            return;
        }
    };

    if cfg.json {
        print_json(&response.data);
        return;
    }

    let results = response.data.get("results").and_then(Value::as_array);
    let Some(results) = results.filter(|r| !r.is_empty()) else {
        println!("No results for: {}", args.query);
        return;
    };

    for result in results {
        let name = field_str(result, "name");
        println!("{name} - {}", field_str(result, "title"));
        println!("  {}", field_str(result, "description"));
        println!(
            "  votes: {}",
            result.get("votes").and_then(Value::as_u64).unwrap_or(0)
        );
        println!("  worldbook get {name}");
        println!("-");
    }
}
