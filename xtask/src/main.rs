// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - developer automation for the Elegant Events workspace
//!
//! `cargo test` runs everything against in-memory `SQLite` and needs no
//! services. `cargo xtask test-mariadb` is the only command that touches
//! Docker: it provisions a throwaway `MariaDB` container, runs the ignored
//! backend validation tests in `elegant-events-persistence` against it, and
//! removes the container afterwards whether or not the tests passed.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output, thread::sleep, time::Duration};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
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
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint clippy and formatting
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy fixes
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run the test suite against `SQLite`
    #[command(visible_alias = "t")]
    Test,

    /// Run `MariaDB` backend validation tests in Docker
    #[command(visible_alias = "tm")]
    TestMariadb,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestMariadb => test_mariadb(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()
}

fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_format()
}

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

fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all"])
}

fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])
}

fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Connection settings of the throwaway `MariaDB` container.
struct MariaDbContainer {
    name: &'static str,
    database: &'static str,
    user: &'static str,
    password: &'static str,
    host_port: u16,
}

impl MariaDbContainer {
    const fn test_default() -> Self {
        Self {
            name: "elegant-events-test-mariadb",
            database: "elegant_events_test",
            user: "elegant_events",
            password: "test_password",
            host_port: 3307,
        }
    }

    fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.host_port, self.database
        )
    }

    fn start(&self) -> Result<()> {
        self.remove();
        tracing::info!(container = self.name, "Starting MariaDB container");
        cmd!(
            "docker",
            "run",
            "--name",
            self.name,
            "-e",
            format!("MARIADB_DATABASE={}", self.database),
            "-e",
            format!("MARIADB_USER={}", self.user),
            "-e",
            format!("MARIADB_PASSWORD={}", self.password),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{}:3306", self.host_port),
            "-d",
            "mariadb:11"
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;
        Ok(())
    }

    /// Polls the server once a second until it answers a query.
    fn wait_until_ready(&self, attempts: u32) -> Result<()> {
        for attempt in 1..=attempts {
            sleep(Duration::from_secs(1));
            tracing::debug!(attempt, attempts, "Probing MariaDB");
            let probe = cmd!(
                "docker",
                "exec",
                self.name,
                "mariadb",
                "-u",
                self.user,
                format!("-p{}", self.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();
            if probe.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(());
            }
        }
        Err(color_eyre::eyre::eyre!(
            "MariaDB did not become ready within {attempts} seconds"
        ))
    }

    /// Stops and removes the container, ignoring a container that is not there.
    fn remove(&self) {
        let _ = cmd!("docker", "stop", self.name)
            .stdout_null()
            .stderr_null()
            .unchecked()
            .run();
        let _ = cmd!("docker", "rm", self.name)
            .stdout_null()
            .stderr_null()
            .unchecked()
            .run();
    }
}

impl Drop for MariaDbContainer {
    fn drop(&mut self) {
        tracing::info!(container = self.name, "Removing MariaDB container");
        self.remove();
    }
}

/// Runs the ignored backend validation tests against a `MariaDB` container.
///
/// Sets `DATABASE_URL` and `ELEGANT_EVENTS_TEST_BACKEND=mariadb` for the test
/// process. The container is removed when this returns, on success or failure.
fn test_mariadb() -> Result<()> {
    cmd!("docker", "--version")
        .run_with_trace()
        .wrap_err("Docker is not available. Please install Docker.")?;

    let container = MariaDbContainer::test_default();
    container.start()?;
    container.wait_until_ready(30)?;

    tracing::info!("Running MariaDB backend validation tests");
    cmd!(
        "cargo",
        "test",
        "--package",
        "elegant-events-persistence",
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.database_url())
    .env("ELEGANT_EVENTS_TEST_BACKEND", "mariadb")
    .run_with_trace()
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

/// Logs each `duct` command before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
