use std::{io::IsTerminal, path::PathBuf};

use clap::ValueHint;
use scenery::{LoadOptions, TransformDefaults};

/// How log events are rendered on stderr. The scene dumps themselves always go to stdout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,scenery=info,inspect=info",
        env = "INSPECT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
    /// Reject nodes which omit any of `translation`, `rotation`, `scale`, or `matrix`
    #[arg(long)]
    pub strict: bool,
    /// Apply node rotations to their transforms
    #[arg(long)]
    pub apply_rotation: bool,
    /// glTF 1.0 documents to inspect
    #[arg(num_args = 1.., required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .with_transform_defaults(if self.strict {
                TransformDefaults::Strict
            } else {
                TransformDefaults::Identity
            })
            .with_rotation(self.apply_rotation)
    }

    /// Send log events to stderr, leaving stdout to the scene dumps.
    ///
    /// Colors are only used when stderr is a terminal, so that redirected logs stay plain text.
    pub fn initialize_tracing(&self) {
        let offset = time::UtcOffset::current_local_offset();
        let tsub = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
                offset.unwrap_or(time::UtcOffset::UTC),
                time::macros::format_description!("[hour]:[minute]:[second]"),
            ))
            .with_env_filter(&self.log_filter);

        match self.log_format {
            LogFormat::Compact => tsub.compact().init(),
            LogFormat::Full => tsub.init(),
            LogFormat::Pretty => tsub.pretty().init(),
            LogFormat::Json => tsub.json().init(),
        }

        // only reportable once a subscriber exists
        if let Err(error) = offset {
            tracing::warn!(%error, "couldn't get local time offset; logging in UTC");
        }
    }
}
