//! Tracing subscriber setup. Logs go to stderr so stdout stays a clean dump.
//!
//! Filter priority: `CRAFTY_DEBUG_LOG` > `RUST_LOG` > `-v`/`-q` flags > `warn`.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

pub fn init_tracing(verbosity: Verbosity) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_target(false);

    let registry = tracing_subscriber::registry().with(build_filter(verbosity));
    // A second install (tests) keeps the first subscriber.
    let _ = if verbosity == Verbosity::Verbose {
        registry.with(layer.with_timer(fmt::time::uptime())).try_init()
    } else {
        registry.with(layer.without_time().compact()).try_init()
    };
}

fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(filter_directives(verbosity, |k| std::env::var(k).ok()))
}

/// First parseable directive string from `CRAFTY_DEBUG_LOG`, then `RUST_LOG`,
/// else the level implied by the flags. Unparseable values are noted on
/// stderr and skipped.
fn filter_directives(verbosity: Verbosity, lookup: impl Fn(&str) -> Option<String>) -> String {
    for var in ["CRAFTY_DEBUG_LOG", "RUST_LOG"] {
        let Some(directives) = lookup(var) else {
            continue;
        };
        match EnvFilter::try_new(&directives) {
            Ok(_) => return directives,
            Err(e) => eprintln!("crafty-debug: ignoring {var}={directives:?}: {e}"),
        }
    }
    verbosity.default_level().as_str().to_lowercase()
}
