/// Shared serializable output types for the static commands.
///
/// These are what `manifesto` and `status` write to stdout — either as
/// pretty-printed JSON or interpolated into fixed text templates.
use serde::Serialize;

/// The Dual Protocol Manifesto document.
#[derive(Debug, Clone, Serialize)]
pub struct Manifesto {
    pub title: &'static str,
    pub motto: &'static str,
    pub belief: &'static str,
    pub problems: ManifestoProblems,
    pub demand: &'static str,
    pub attitude: &'static str,
    pub why_cli: WhyCli,
    pub essence: &'static str,
    pub call_to_action: &'static str,
    pub url: &'static str,
}

/// What today's human-first web does to agents.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestoProblems {
    pub captcha: &'static str,
    pub rendering: &'static str,
    pub output: &'static str,
}

/// Why plain CLIs beat the alternatives.
#[derive(Debug, Clone, Serialize)]
pub struct WhyCli {
    pub skills: &'static str,
    pub mcp: &'static str,
    pub cli: &'static str,
}

/// `status` command output.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    /// Package version.
    pub version: &'static str,
    /// Always `"ok"`.
    pub status: &'static str,
    /// The motto line.
    pub motto: &'static str,
}
