//! Subscriber setup for hosts and test binaries that want to see the
//! resolver's `tracing` events. The library itself only emits events.

use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("json_data={level}")
    }
}

fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()))
}

/// Install a global subscriber. Panics if one is already set.
pub fn init(verbosity: Verbosity) {
    if !try_init(verbosity) {
        panic!("a global tracing subscriber is already installed");
    }
}

/// Install a global subscriber writing to stderr unless one is already set.
///
/// Returns whether this call installed it.
pub fn try_init(verbosity: Verbosity) -> bool {
    install(verbosity, BoxMakeWriter::new(std::io::stderr))
}

/// Like [`try_init`], but output goes through the test writer so
/// `cargo test` captures it per test.
pub fn try_init_for_tests(verbosity: Verbosity) -> bool {
    install(verbosity, BoxMakeWriter::new(TestWriter::new()))
}

fn install(verbosity: Verbosity, writer: BoxMakeWriter) -> bool {
    let writer = match verbosity {
        Verbosity::Quiet => BoxMakeWriter::new(std::io::sink),
        _ => writer,
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter(verbosity))
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .with_writer(writer)
        .compact();

    match verbosity {
        Verbosity::Normal => subscriber.without_time().try_init().is_ok(),
        _ => subscriber.try_init().is_ok(),
    }
}
