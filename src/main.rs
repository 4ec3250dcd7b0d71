use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{bail, Result};
use lib::cli::{Answer, Report};
use serde::{de::IntoDeserializer, Deserialize};

/// The year whose solutions are run.
const PACKAGE: &str = "y2024";

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("missing stdout for `{0}`")]
    MissingStdout(String),
    #[error("missing executable for `{0}`")]
    MissingExecutable(String),
    #[error("`cargo build` failed: {0}")]
    Build(ExitStatus),
    #[error("{0}: exited with {1}")]
    Solution(String, ExitStatus),
}

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    /// Test if options are verbose.
    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let executables = build()?;

    let mut total = Report::default();
    let mut failed = Vec::new();

    for e in executables {
        let mut cmd = Command::new(&e.path);
        cmd.stdout(Stdio::piped());
        cmd.args(&opts.args[..]);
        cmd.arg("--json");

        let mut child = cmd.spawn()?;
        let output = child
            .stdout
            .take()
            .ok_or_else(|| Error::MissingStdout(e.name.clone()))?;
        let output = serde_json::Deserializer::from_reader(output).into_iter();

        for value in output {
            let value: serde_json::Value = value?;

            match value.get("type").and_then(|d| d.as_str()) {
                Some("answer") => {
                    let answer = Data::<Answer>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!("{name}: {answer}", name = e.name);
                    }
                }
                Some("report") => {
                    let report = Data::<Report>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!("{name}: {report}", name = e.name);
                    }

                    total += &report;
                }
                Some("message") => {
                    let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                    if opts.is_verbose() || message.is_important() {
                        println!(
                            "{name}: {kind}: {output}",
                            name = e.name,
                            kind = message.kind,
                            output = message.output
                        );
                    }
                }
                _ => {}
            }
        }

        let status = child.wait()?;

        if opts.is_verbose() {
            println!("{name}: {status}", name = e.name);
        }

        if !status.success() {
            failed.push(Error::Solution(e.name, status));
        }
    }

    if total.count > 0 {
        println!("total: {total}");
    }

    for error in &failed {
        println!("error: {error}");
    }

    if !failed.is_empty() {
        bail!("{} solution(s) failed", failed.len());
    }

    Ok(())
}

/// Build all solutions in release mode and collect their executables, sorted
/// by name.
fn build() -> Result<Vec<Executable>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.arg("build");
    cmd.arg("--release");
    cmd.args(["-p", PACKAGE]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;

    let output = child
        .stdout
        .take()
        .ok_or_else(|| Error::MissingStdout(String::from("cargo")))?;
    let output = serde_json::Deserializer::from_reader(output).into_iter();

    let mut executables = Vec::new();

    for value in output {
        let value: serde_json::Value = value?;

        if !matches!(
            value.get("reason").and_then(|d| d.as_str()),
            Some("compiler-artifact")
        ) {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        let [kind] = &artifact.target.kind[..] else {
            continue;
        };

        if kind != "bin" {
            continue;
        }

        let path = artifact
            .executable
            .ok_or_else(|| Error::MissingExecutable(artifact.target.name.clone()))?;

        executables.push(Executable {
            name: artifact.target.name,
            path,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        return Err(Error::Build(status).into());
    }

    executables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(executables)
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_important(&self) -> bool {
        matches!(self.kind.as_str(), "error" | "warn")
    }
}
