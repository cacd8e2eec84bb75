//! Logger setup: `env_logger` writing to stdout, optionally teed to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Writes everything to stdout and an ANSI-stripped copy to a log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Install the global logger.
///
/// `RUST_LOG` takes precedence over the level picked from the flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(level));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Warn | log::Level::Error => {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder.init();
    Ok(())
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
