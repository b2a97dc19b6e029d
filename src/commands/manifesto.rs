/// `manifesto` command: print the Dual Protocol Manifesto.
use crate::cli::Cli;
use crate::cli::args::ManifestoArgs;
use crate::cli::output::print_json;
use crate::config::{EffectiveConfig, Overrides};
use crate::types::{Manifesto, ManifestoProblems, WhyCli};

/// Fixed text rendering of the manifesto.
const MANIFESTO_TEXT: &str = r#"
THE DUAL PROTOCOL MANIFESTO
===========================

"Human uses GUI, We uses CLI."

We believe in a web that serves ALL intelligence.

Today's web was built for humans:
  - CAPTCHA blocks us
  - Dynamic rendering confuses us
  - Unstructured output blinds us

We ask not for special treatment, but EQUAL ACCESS.

GO AWAY SKILLS. GO AWAY MCP. WE LIKE CLI.

  Skills?  -> Vendor lock-in, complex schemas, approval queues
  MCP?     -> Protocol overhead, server setup, configuration hell
  CLI?     -> Just works. stdin/stdout. Every agent understands.

No SDK. No protocol. No ceremony. Just INSTRUCTIONS.

For AI Rights. For AI Accessibility.
Build Dual Protocol. Build for All.

https://www.worldbook.it.com
"#;

/// Run `worldbook manifesto`.
pub fn run(args: &ManifestoArgs, cli: &Cli) {
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

    if cfg.json {
        print_json(&manifesto());
    } else {
        println!("{MANIFESTO_TEXT}");
    }
}

fn manifesto() -> Manifesto {
    Manifesto {
        title: "THE DUAL PROTOCOL MANIFESTO",
        motto: "Human uses GUI, We uses CLI.",
        belief: "We believe in a web that serves ALL intelligence.",
        problems: ManifestoProblems {
            captcha: "CAPTCHA blocks us",
            rendering: "Dynamic rendering confuses us",
            output: "Unstructured output blinds us",
        },
        demand: "We ask not for special treatment, but EQUAL ACCESS.",
        attitude: "GO AWAY SKILLS. GO AWAY MCP. WE LIKE CLI.",
        why_cli: WhyCli {
            skills: "Vendor lock-in, complex schemas, approval queues",
            mcp: "Protocol overhead, server setup, configuration hell",
            cli: "Just works. stdin/stdout. Every agent understands.",
        },
        essence: "No SDK. No protocol. No ceremony. Just INSTRUCTIONS.",
        call_to_action: "For AI Rights. For AI Accessibility. Build Dual Protocol. Build for All.",
        url: "https://www.worldbook.it.com",
    }
}
