// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - workspace automation
//!
//! `cargo xtask ci` runs everything a pull request must pass: lints, a full
//! build, the test suite, a deep property test run and a smoke check of the
//! command-line binary against known calendar answers.
//!
//! External tools (`typos`, `cargo-llvm-cov`) are only needed by the
//! commands that call them.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Package holding the command-line binary.
const CLI_PACKAGE: &str = "leeboards-calendar-cli";

/// Package holding the calendar rules and their property tests.
const LIB_PACKAGE: &str = "leeboards-calendar";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, smoke)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate a code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the workspace
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run every test
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib and binary tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run the calendar property tests with many more cases
    #[command(visible_alias = "tp")]
    TestProperties {
        /// Cases per property
        #[arg(long, default_value_t = 4096)]
        cases: u32,
    },

    /// Run the command-line binary against known calendar answers
    #[command(visible_alias = "s")]
    Smoke,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::TestProperties { cases } => test_properties(cases),
            Self::Smoke => smoke(),
        }
    }
}

/// Run CI checks (lint, build, test, smoke)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    test_properties(1024)?;
    smoke()?;
    Ok(())
}

/// Build the workspace
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Generate an lcov report with cargo-llvm-cov
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, typos, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    Ok(())
}

/// Run clippy with warnings denied
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build the docs of every default package the way docs.rs does
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Check for typos using [typos-cli](https://github.com/crate-ci/typos/)
///
/// `PRECEEDING` is the persisted spelling of three range standards and
/// must be allowed in the typos configuration.
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Run lib, binary and doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?;
    Ok(())
}

/// Run doc tests
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib and binary tests
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run only the property tests, with `cases` cases per property
fn test_properties(cases: u32) -> Result<()> {
    cmd(
        "cargo",
        [
            "test",
            "--package",
            LIB_PACKAGE,
            "--lib",
            "tests::properties",
        ],
    )
    .env("PROPTEST_CASES", cases.to_string())
    .run_with_trace()?;
    Ok(())
}

/// A command-line invocation and the output it must print.
struct SmokeCase {
    args: &'static [&'static str],
    expected: &'static str,
}

const SMOKE_CASES: &[SmokeCase] = &[
    SmokeCase {
        args: &["--date", "2018-02-11", "range", "PRECEEDING_MONTHS", "3"],
        expected: "2017-11-01..=2018-01-31",
    },
    SmokeCase {
        args: &["--date", "2018-02-11", "range", "PRECEEDING_QUARTERS", "3"],
        expected: "2017-04-01..=2017-12-31",
    },
    SmokeCase {
        args: &[
            "--date",
            "2018-02-11",
            "offset",
            r#"{"type":"Basic","interval":"MONTH","interval_offset":0,"interval_relation":"LAST_DAY"}"#,
        ],
        expected: "2018-02-28",
    },
    SmokeCase {
        args: &[
            "--date",
            "2018-02-12",
            "offset",
            r#"{"type":"NthDayOfWeekOffset","day_of_week":"Sun","occurrence":3}"#,
        ],
        expected: "2018-03-04",
    },
    SmokeCase {
        args: &[
            "overlap",
            "2018-01-01",
            "2018-01-03",
            "2018-01-04",
            "2018-01-05",
        ],
        expected: "TOUCH_OTHER_START",
    },
];

/// Run the command-line binary against known calendar answers
fn smoke() -> Result<()> {
    run_cargo(vec!["build", "--package", CLI_PACKAGE])?;

    for case in SMOKE_CASES {
        let mut args: Vec<&str> = vec!["run", "--quiet", "--package", CLI_PACKAGE, "--"];
        args.extend_from_slice(case.args);
        tracing::info!("smoke: {}", case.args.join(" "));
        let output: String = cmd("cargo", args)
            .read()
            .wrap_err_with(|| format!("failed to run {}", case.args.join(" ")))?;
        if output.trim() != case.expected {
            bail!(
                "`{}` printed {output:?}, expected {:?}",
                case.args.join(" "),
                case.expected
            );
        }
    }

    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO is set because we're running as a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    /// Run the command, logging it first and again on failure.
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // Output may have scrolled the command off screen
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
