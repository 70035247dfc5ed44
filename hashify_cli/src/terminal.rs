//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stdin, stdout};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners sometimes allocate a TTY without anyone watching it
    if is_ci_environment() {
        return false;
    }

    if env::var("DEBIAN_FRONTEND").unwrap_or_default() == "noninteractive" {
        return false;
    }

    true
}

/// Check if stdin is a terminal, i.e. nothing was piped in
pub fn stdin_is_terminal() -> bool {
    stdin().is_terminal()
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return false;
    }

    #[cfg(windows)]
    {
        // Windows 10+ consoles and Windows Terminal handle ANSI natively
        return true;
    }

    #[cfg(not(windows))]
    {
        !term.is_empty()
    }
}

/// Check if the terminal can render 24-bit colors
///
/// Fingerprints fall back to CSS output when this is false.
pub fn supports_truecolor() -> bool {
    if !supports_ansi() {
        return false;
    }

    matches!(
        env::var("COLORTERM").unwrap_or_default().as_str(),
        "truecolor" | "24bit"
    ) || env::var("WT_SESSION").is_ok()
}

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "TRAVIS",
        "CIRCLECI",
        "BUILDKITE",
        "DRONE",
        "TEAMCITY_VERSION",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}
