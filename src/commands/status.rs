/// `status` command: show CLI version and health.
use crate::cli::Cli;
use crate::cli::args::StatusArgs;
use crate::cli::output::print_json;
use crate::config::{EffectiveConfig, Overrides};
use crate::types::Status;

/// Run `worldbook status`.
pub fn run(args: &StatusArgs, cli: &Cli) {
    let cfg = EffectiveConfig::from_env(
        Overrides {
            json: args.json,
            base_url: None,
        },
        Overrides {
            json: cli.json,
            base_url: cli.base_url.as_deref(),
        },
    );

    let data = Status {
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
        motto: "Human uses GUI, We uses CLI.",
    };

    if cfg.json {
        print_json(&data);
    } else {
        println!("Worldbook CLI v{}", data.version);
        println!("Status: ok");
        println!("\"Human uses GUI, We uses CLI.\"");
    }
}
