//! The process-wide destination of statistic lines.
//!
//! Statistics are only written after [`configure_statistic_logging`] has been called; until then
//! every logging call is a no-op, which keeps library users free of unexpected output.

use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistic lines are formatted and where they are written.
///
/// A statistic is written as `{prefix} {name}={value}`, and a block of statistics may be closed by
/// a postfix line.
pub struct StatisticOptions {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl std::fmt::Debug for StatisticOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

impl StatisticOptions {
    fn format_name(&self, name: impl Display) -> String {
        match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        }
    }

    fn write_line(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Enables statistic logging with the given line prefix, optional closing line and optional
/// casing of the statistic names. Without a `writer`, statistics go to stdout.
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            prefix,
            postfix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(std::io::stdout())),
        })
    });
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        match options.lock() {
            Ok(mut options) => action(&mut options),
            Err(e) => debug!("Statistic logging is unavailable: {e}"),
        }
    }
}

/// Writes the statistic `name` with `value` if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = options.format_name(name);
        let line = format!("{} {name}={value}", options.prefix);
        options.write_line(line);
    });
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(postfix) = options.postfix {
            options.write_line(postfix);
        }
    });
}

/// Returns true once [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
