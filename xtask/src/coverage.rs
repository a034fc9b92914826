use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::{path::PathBuf, process::Command};

/// Source paths left out of the report unless more are added with `--remove`.
pub const DEFAULT_REMOVE_MASKS: &[&str] = &["(^|/)tests/", "(^|/)benches/", "(^|/)xtask/"];

/// Cargo subcommand that instruments the build and renders the report.
pub const LLVM_COV_BIN: &str = "cargo-llvm-cov";

pub const USAGE: &str = "\
Usage: cargo xtask coverage [OPTIONS]

Options:
  --no-coverage     Run the test suite without instrumentation
  --no-open         Do not open the HTML report
  --no-clean        Keep coverage artifacts from previous runs
  --no-install      Fail instead of installing cargo-llvm-cov when missing
  --release         Build in release mode
  --remove <REGEX>  Exclude matching source paths (repeatable)
  -h, --help        Print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageOptions {
    pub coverage: bool,
    pub open: bool,
    pub clean: bool,
    pub install: bool,
    pub release: bool,
    pub remove: Vec<String>,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            coverage: true,
            open: true,
            clean: true,
            install: true,
            release: false,
            remove: DEFAULT_REMOVE_MASKS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl CoverageOptions {
    /// Parses the arguments following `coverage`. `--remove` adds to the defaults.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-coverage" => options.coverage = false,
                "--no-open" => options.open = false,
                "--no-clean" => options.clean = false,
                "--no-install" => options.install = false,
                "--release" => options.release = true,
                "--remove" => {
                    let Some(mask) = args.next() else {
                        bail!("--remove requires a pattern");
                    };
                    options.remove.push(mask);
                }
                other => {
                    let Some(mask) = other.strip_prefix("--remove=") else {
                        bail!("Unknown coverage option: {}\n\n{}", other, USAGE);
                    };
                    options.remove.push(mask.to_string());
                }
            }
        }

        Ok(options)
    }

    pub fn ignore_regex(&self) -> String {
        self.remove.join("|")
    }

    /// Cargo invocations for this run, in order.
    pub fn plan(&self) -> Vec<Vec<String>> {
        let mut steps = Vec::new();

        if !self.coverage {
            let mut test = vec!["test".to_string(), "--workspace".to_string()];
            if self.release {
                test.push("--release".to_string());
            }
            steps.push(test);
            return steps;
        }

        if self.clean {
            steps.push(vec![
                "llvm-cov".to_string(),
                "clean".to_string(),
                "--workspace".to_string(),
            ]);
        }

        let mut report = vec![
            "llvm-cov".to_string(),
            "--workspace".to_string(),
            "--html".to_string(),
        ];
        if !self.remove.is_empty() {
            report.push("--ignore-filename-regex".to_string());
            report.push(self.ignore_regex());
        }
        if self.release {
            report.push("--release".to_string());
        }
        if self.open {
            report.push("--open".to_string());
        }
        steps.push(report);

        steps
    }
}

fn cargo() -> String {
    std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}

fn run_cargo(args: &[String]) -> Result<()> {
    info!("$ cargo {}", args.join(" "));
    let status = Command::new(cargo())
        .args(args)
        .status()
        .with_context(|| format!("Failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("cargo {} exited with {}", args.join(" "), status);
    }
    Ok(())
}

fn ensure_llvm_cov(install: bool) -> Result<()> {
    if let Ok(path) = which::which(LLVM_COV_BIN) {
        info!("Using {} at: {}", LLVM_COV_BIN, path.display());
        return Ok(());
    }

    if !install {
        bail!(
            "{} not found in PATH. Install it with `cargo install {}` or run without --no-install.",
            LLVM_COV_BIN,
            LLVM_COV_BIN
        );
    }

    info!("Installing {}", LLVM_COV_BIN);
    run_cargo(&[
        "install".to_string(),
        LLVM_COV_BIN.to_string(),
        "--locked".to_string(),
    ])
}

fn report_index() -> PathBuf {
    let target = std::env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".to_string());
    PathBuf::from(target).join("llvm-cov/html/index.html")
}

pub fn run(options: &CoverageOptions) -> Result<()> {
    if options.coverage {
        ensure_llvm_cov(options.install)?;
    }

    for step in options.plan() {
        run_cargo(&step)?;
    }

    if !options.coverage {
        info!("Tests passed (coverage disabled)");
        return Ok(());
    }

    let index = report_index();
    if index.exists() {
        info!("Coverage report: {}", index.display());
    } else {
        warn!("Coverage report not found at {}", index.display());
    }
    Ok(())
}
