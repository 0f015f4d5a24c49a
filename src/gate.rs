use crate::config::ResolvedEnv;
use std::fmt;
use tracing::warn;

/// Credential required for server startup.
pub const REQUIRED_KEY: &str = "GROQ_API_KEY";
/// Credential reported but never enforced.
pub const OPTIONAL_KEY: &str = "GEMINI_API_KEY";

/// Presence indicator for a credential. The value itself is never stored, so
/// diagnostics cannot leak it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Configured,
    Missing,
}

impl CredentialStatus {
    fn of(env: &ResolvedEnv, key: &str) -> Self {
        if env.get(key).is_some() {
            Self::Configured
        } else {
            Self::Missing
        }
    }

    pub fn is_configured(self) -> bool {
        matches!(self, Self::Configured)
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured => write!(f, "configured"),
            Self::Missing => write!(f, "not found"),
        }
    }
}

/// Outcome of the precondition gate.
#[derive(Debug, Clone, Copy)]
pub struct GateReport {
    pub required: CredentialStatus,
    pub optional: CredentialStatus,
}

impl GateReport {
    pub fn evaluate(env: &ResolvedEnv) -> Self {
        Self {
            required: CredentialStatus::of(env, REQUIRED_KEY),
            optional: CredentialStatus::of(env, OPTIONAL_KEY),
        }
    }

    /// The optional credential never gates execution.
    pub fn passed(&self) -> bool {
        self.required.is_configured()
    }

    pub fn status_lines(&self) -> Vec<String> {
        let required_marker = match self.required {
            CredentialStatus::Configured => "✅",
            CredentialStatus::Missing => "❌",
        };
        let optional_marker = match self.optional {
            CredentialStatus::Configured => "✅",
            CredentialStatus::Missing => "⚠️",
        };
        vec![
            format!("{required_marker} {REQUIRED_KEY}: {}", self.required),
            format!("{optional_marker} {OPTIONAL_KEY}: {}", self.optional),
        ]
    }
}

pub fn print_report(report: &GateReport) {
    for line in report.status_lines() {
        println!("{line}");
    }
    if !report.optional.is_configured() {
        warn!(key = OPTIONAL_KEY, "Optional credential not configured");
    }
}

pub fn print_remediation() {
    println!();
    println!("❌ {REQUIRED_KEY} is required to start the server.");
    println!("Create a .env file next to the launcher containing:");
    println!("  {REQUIRED_KEY}=<your Groq API key>");
    println!("  {OPTIONAL_KEY}=<your Gemini API key>  (optional)");
}
