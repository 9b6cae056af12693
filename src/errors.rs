use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("Empty command line: no executable to invoke")]
    EmptyCommand,

    #[error("No benchmark executable specified. Use --exe or set `exe` in the config file")]
    MissingExecutable,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited abnormally ({status}){}", format_stderr(.stderr))]
    AbnormalExit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to create results file {path}: {source}")]
    SinkCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write results to {path}: {source}")]
    SinkWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid block-shift range: min {min} exceeds max {max}")]
    InvalidShiftRange { min: u32, max: u32 },

    #[error("Block shift {shift} is too large (maximum {max})")]
    ShiftTooLarge { shift: u32, max: u32 },

    #[error("Repetition count must be at least 1")]
    ZeroRepetitions,
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
