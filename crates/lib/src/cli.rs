//! CLI helpers.

mod answers;
mod bencher;
mod error;
mod output;
mod output_eq;
mod stdout_logger;
#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::answers::{Answer, Answers};
pub use self::bencher::Bencher;
pub use self::error::error_context;
pub(crate) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static NORMAL_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger::Normal;
static JSON_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger::Json;

/// Run mode.
#[derive(Debug, Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1).map(|arg| {
            arg.into_string()
                .map_err(|_| anyhow!("non-utf8 argument"))
        }))?;

        log::set_max_level(if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

        let logger = if opts.json {
            &JSON_LOGGER
        } else {
            &NORMAL_LOGGER
        };

        log::set_logger(logger).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let arg = arg?;

            match arg.as_str() {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

fn value<I, T>(it: &mut I, flag: &str) -> Result<T>
where
    I: Iterator<Item = Result<String>>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{flag}`"))??;

    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{flag}`"))
}

/// Verify that the computed value matches what's expected.
pub fn expect<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if !value.output_eq(expected) {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

/// Print the answers of a solution and write them to `answers` if specified.
pub fn publish<A>(
    opts: &Opts,
    answers: Option<(&str, &Path)>,
    labels: &[&str],
    value: &A,
) -> Result<()>
where
    A: ?Sized + Answers,
{
    let values = value.answers(labels);

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    for answer in &values {
        o.answer(answer)?;
    }

    let Some((path, write_path)) = answers else {
        return Ok(());
    };

    write_answers(write_path, &values).with_context(|| anyhow!("{path}"))?;
    log::info!("answers written to {path}");
    Ok(())
}

fn write_answers(path: &Path, answers: &[Answer]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;

    for answer in answers {
        writeln!(f, "{answer}")?;
    }

    f.flush()?;
    Ok(())
}

#[derive(Default, Debug, PartialEq, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report from a sorted collection of samples.
    pub(crate) fn from_samples(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Nearest-rank percentile of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let rank = (samples.len() * p).div_ceil(100).max(1);
    samples[rank - 1]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}
