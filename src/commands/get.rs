/// `get` command: fetch the worldbook for a single service.
use super::field_str;
use crate::api::{ApiClient, ApiError};
use crate::cli::Cli;
use crate::cli::args::GetArgs;
use crate::cli::output::{DebugTimer, print_json, write_api_error};
use crate::config::{EffectiveConfig, Overrides};

/// Run `worldbook get`.
///
/// A 404 means "no such worldbook" and gets its own message; other non-2xx
/// statuses go through the generic HTTP error path.
pub fn run(args: &GetArgs, cli: &Cli) {
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
    let path = format!("/api/worldbook/{}", args.service);

    let timer = DebugTimer::start(format!("GET {path}"), cli.debug);
    let outcome = client.get_json(&path, &[]);
    drop(timer);

    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            write_api_error(&err, &cfg, "service", &args.service);
            return;
        }
    };

    if response.status_code == 404 {
        if cfg.json {
            print_json(&serde_json::json!({
                "error": "not_found",
                "service": args.service,
            }));
        } else {
            println!("Worldbook not found: {}", args.service);
        }
        return;
    }

    if !response.is_success() {
        let err = ApiError::HttpStatus {
            status_code: response.status_code,
        };
        write_api_error(&err, &cfg, "service", &args.service);
        return;
    }

    if cfg.json {
        print_json(&response.data);
    } else {
        println!("{}", field_str(&response.data, "content"));
    }
}
