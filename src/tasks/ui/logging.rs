/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use log::{Level, LevelFilter};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Every crate of the workspace that may log.
const ONB_TARGETS: &[&str] = &[
    "onb_tasks",
    "onb_tasks_config",
    "onb_gram_schmidt",
    "onb_matrix",
    "onb_ordset",
    "onb_tolerance",
];

/// Logging for the `onb` binary.
///
/// Everything is written to stderr, since stdout is reserved for the JSON
/// result.  A copy may also go to a file, which is never colored.
#[derive(Debug, Clone)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
    color: bool,
}

impl Default for GlobalLogger {
    fn default() -> Self {
        GlobalLogger { path: None, verbosity: Verbosity::Default, color: true }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Verbosity { Default, Loud }

impl GlobalLogger {
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Number of `-v` flags. Anything above zero turns on `trace` for onb.
    pub fn verbosity(&mut self, count: u64) -> &mut Self {
        self.verbosity = match count {
            0 => Verbosity::Default,
            _ => Verbosity::Loud,
        };
        self
    }

    /// Colorize the level names written to stderr.
    pub fn color(&mut self, color: bool) -> &mut Self
    { self.color = color; self }

    fn target_levels(&self) -> Vec<(&'static str, LevelFilter)> {
        ONB_TARGETS.iter().map(|&target| {
            let level = match self.verbosity {
                Verbosity::Loud => LevelFilter::Trace,
                Verbosity::Default => LevelFilter::Info,
            };
            (target, level)
        }).collect()
    }

    /// Install the logger.  This can only succeed once per process.
    pub fn apply(&mut self) -> FailResult<()> {
        let start = Instant::now();

        // dependencies only get to warn
        let mut root = fern::Dispatch::new().level(LevelFilter::Warn);
        for (target, level) in self.target_levels() {
            root = root.level_for(target, level);
        }

        root = root.chain(formatted(start, self.color).chain(std::io::stderr()));
        if let Some(path) = self.path.as_ref() {
            root = root.chain(formatted(start, false).chain(fern::log_file(path)?));
        }

        root.apply()?;
        Ok(())
    }
}

fn formatted(start: Instant, color: bool) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel { level: record.level(), color },
                message))
        })
}

/// A log level name, optionally in ANSI color.
#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel {
    pub level: Level,
    pub color: bool,
}

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.color {
            return write!(f, "{}", self.level);
        }
        let style = match self.level {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.level.to_string()))
    }
}
