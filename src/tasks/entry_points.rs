/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{FailResult, VersionInfo};
use crate::cmd::compute_basis;
use crate::filetypes::VectorsFile;
use crate::ui::logging::GlobalLogger;

use onb_tasks_config::{Settings, BasisOrdering, YamlRead};

use clap::{App, Arg, ArgMatches};
use failure::ResultExt;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Write};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn app<'a, 'b>(version: &'b str) -> App<'a, 'b> {
    App::new("onb")
        .version(version)
        .about("Compute an orthonormal basis for the span of a set of vectors.")
        .args(&[
            Arg::with_name("input")
                .required(true)
                .value_name("INPUT")
                .help("yaml (or json) file with 'vectors' and optional 'queries'"),
            Arg::with_name("config")
                .short("c").long("config")
                .takes_value(true).value_name("CONFIG")
                .help("settings yaml"),
            Arg::with_name("epsilon")
                .long("epsilon")
                .takes_value(true).value_name("EPS").allow_hyphen_values(true)
                .help("absolute tolerance; overrides the settings file"),
            Arg::with_name("ordering")
                .long("ordering")
                .takes_value(true).value_name("MODE")
                .possible_values(&["canonical", "insertion", "orthogonal"])
                .help("overrides the settings file"),
            Arg::with_name("output")
                .short("o").long("output")
                .takes_value(true).value_name("FILE")
                .help("write json here instead of stdout"),
            Arg::with_name("log")
                .long("log")
                .takes_value(true).value_name("FILE")
                .help("also write the log to this file"),
            Arg::with_name("no_color")
                .long("no-color")
                .help("do not colorize log levels on stderr"),
            Arg::with_name("verbose")
                .short("v").multiple(true)
                .help("trace the orthogonalization"),
        ])
}

fn resolve_settings(matches: &ArgMatches<'_>) -> FailResult<Settings> {
    let mut settings = match matches.value_of("config") {
        Some(path) => {
            let file = File::open(path).with_context(|_| format!("could not open '{}'", path))?;
            Settings::from_reader(file).with_context(|_| format!("while reading '{}'", path))?
        },
        None => Settings::default(),
    };

    if let Some(s) = matches.value_of("epsilon") {
        settings.epsilon = match s.parse() {
            Ok(x) => x,
            Err(_) => bail!("invalid value for --epsilon: '{}'", s),
        };
    }
    if let Some(s) = matches.value_of("ordering") {
        settings.ordering = match s {
            "canonical" => BasisOrdering::Canonical,
            "insertion" => BasisOrdering::Insertion,
            "orthogonal" => BasisOrdering::Orthogonal,
            _ => bail!("invalid value for --ordering: '{}'", s),
        };
    }
    Ok(settings)
}

// -------------------------------------------------------------------------------------

// %% CRATES: binary: onb %%
pub fn onb(version: VersionInfo) {
    wrap_result_main(|| {
        let matches = app(version.version).get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose"));
        logger.color(!matches.is_present("no_color"));
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        let settings = resolve_settings(&matches)?.validate()?;

        let input_path = matches.value_of("input").unwrap_or_default();
        let input = {
            let file = File::open(input_path)
                .with_context(|_| format!("could not open '{}'", input_path))?;
            VectorsFile::from_reader(file)
                .with_context(|_| format!("while reading '{}'", input_path))?
        };

        let output = compute_basis(&input, &settings)?;

        match matches.value_of("output") {
            Some(path) => {
                let file = File::create(path).with_context(|_| format!("could not create '{}'", path))?;
                serde_json::to_writer_pretty(file, &output)?;
            },
            None => {
                let stdout = io::stdout();
                let mut stdout = stdout.lock();
                serde_json::to_writer_pretty(&mut stdout, &output)?;
                writeln!(stdout)?;
            },
        }
        Ok(())
    });
}
