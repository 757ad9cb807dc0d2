/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use]
extern crate pretty_assertions;

use failure::Error;
use tempdir::TempDir;

use std::ffi::{OsStr, OsString};
use std::fmt::Debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;

pub type Result<T> = std::result::Result<T, Error>;

/// What a checker gets to look at after the binary exits.
#[derive(Debug)]
pub struct Outcome<'a> {
    /// The temporary working directory the binary ran in.
    pub dir: &'a Path,
    pub stdout: &'a str,
    pub stderr: &'a str,
}

pub type Checker = Box<dyn Fn(&Outcome<'_>) -> Result<()>>;

/// Runs a binary in a fresh temporary directory.
///
/// Files from `resources` (if given) are copied into the directory first, so
/// relative paths in the arguments can refer to them.
#[must_use]
pub struct CliTest {
    bin: OsString,
    args: Vec<OsString>,
    resources: Option<PathBuf>,
    expect_success: Option<bool>,
    checkers: Vec<Checker>,
}

impl CliTest {
    /// Usually called with `env!("CARGO_BIN_EXE_<name>")`.
    pub fn binary(path: impl AsRef<OsStr>) -> Self {
        CliTest {
            bin: path.as_ref().to_owned(),
            args: vec![],
            resources: None,
            expect_success: Some(true),
            checkers: vec![],
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<S: AsRef<OsStr>>(mut self, args: &[S]) -> Self {
        self.args.extend(args.iter().map(|s| s.as_ref().to_owned()));
        self
    }

    pub fn resources(mut self, dir: impl AsRef<Path>) -> Self {
        self.resources = Some(dir.as_ref().to_owned());
        self
    }

    /// `None` accepts any exit status.
    pub fn expect_success(mut self, expected: Option<bool>) -> Self {
        self.expect_success = expected;
        self
    }

    pub fn check<F>(mut self, checker: F) -> Self
    where F: Fn(&Outcome<'_>) -> Result<()> + 'static,
    {
        self.checkers.push(Box::new(checker));
        self
    }

    /// Compare the JSON on stdout against a file.
    pub fn check_stdout_json<T: CheckFile>(self, expected_path: impl AsRef<Path>) -> Self {
        let expected_path = expected_path.as_ref().to_owned();
        self.check(move |outcome| {
            let actual: T = serde_json::from_str(outcome.stdout)?;
            let expected = T::read_file(&expected_path)?;
            check_against_with_diff(&actual, &expected);
            Ok(())
        })
    }

    pub fn run(self) -> Result<()> {
        let CliTest { bin, args, resources, expect_success, checkers } = self;

        let tmp = TempDir::new("onb")?;
        if let Some(resources) = resources {
            for entry in fs::read_dir(resources)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    fs::copy(entry.path(), tmp.path().join(entry.file_name()))?;
                }
            }
        }

        let stdout_path = tmp.path().join("__captured_stdout");
        let stderr_path = tmp.path().join("__captured_stderr");
        let status = {
            Command::new(&bin)
                .args(&args)
                .current_dir(tmp.path())
                // capture for the test harness
                .stdout(File::create(&stdout_path)?)
                .stderr(File::create(&stderr_path)?)
                .status()?
        };
        let stdout = fs::read_to_string(&stdout_path)?;
        let stderr = fs::read_to_string(&stderr_path)?;
        print!("{}", stdout);
        eprint!("{}", stderr);

        if let Some(success) = expect_success {
            assert_eq!(success, status.success(), "{}", status);
        }

        let outcome = Outcome { dir: tmp.path(), stdout: &stdout, stderr: &stderr };
        for checker in checkers {
            checker(&outcome)?;
        }
        Ok(())
    }
}

pub trait CheckFile: Sized + Debug + PartialEq + serde::de::DeserializeOwned + std::panic::RefUnwindSafe {
    fn read_file(path: &Path) -> Result<Self>
    { Ok(serde_json::from_reader(File::open(path)?)?) }

    /// Panics if the two are not equivalent.
    fn check_against(&self, expected: &Self);
}

fn check_against_with_diff<T: CheckFile>(a: &T, b: &T) {
    // Let check_against use things like `assert_close!` that might panic.
    let result = std::panic::catch_unwind(move || a.check_against(b));

    // If it did panic, show a colorful diff of the Debug output instead.
    if result.is_err() {
        assert_eq!(a, b, "Showing diff from pretty_assertions.");
        panic!("check_against failed but assert_eq succeeded?!");
    }
}
