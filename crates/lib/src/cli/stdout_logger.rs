use log::Log;

use crate::cli::{Output, OutputKind};

pub(crate) enum StdoutLogger {
    /// Plain `file:line: LEVEL: message` lines.
    Normal,
    /// JSON `message` lines, as consumed by the runner.
    Json,
}

impl Log for StdoutLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        match self {
            StdoutLogger::Normal => {
                println!(
                    "{file}:{line}: {}: {}",
                    record.level(),
                    record.args(),
                    file = record.file().unwrap_or_default(),
                    line = record.line().unwrap_or_default()
                );
            }
            StdoutLogger::Json => {
                let stdout = std::io::stdout();
                let mut o = Output::new(stdout.lock(), OutputKind::Json);
                let _ = o.message(record.level().into(), record.args());
            }
        }
    }

    fn flush(&self) {}
}
