use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::SweepError;

/// Largest accepted power-of-two exponent for a block size. Keeps block
/// sizes inside `u32` like `time_block`, and far away from shift overflow.
pub const MAX_BLOCK_SHIFT: u32 = 31;

/// Full parameter surface of one sweep run.
///
/// Every field can come from a TOML config file; `main` applies CLI flag
/// overrides on top. Defaults mirror the reference convolution scenario:
/// block sizes 2^8..=2^16 in freq mode, one time-mode row at block 1024,
/// 100 repetitions per point.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Path to the benchmarked executable. Required (no usable default).
    pub exe: PathBuf,
    /// Input audio file handed through as `-i`.
    pub input: PathBuf,
    /// Impulse-response file handed through as `-r`.
    pub impulse_response: PathBuf,
    /// Where the benchmarked program writes its own output (`-o`).
    pub wav_out: PathBuf,
    /// Destination CSV for the result table.
    pub results: PathBuf,
    /// Trials per configuration point.
    pub repetitions: u32,
    /// Gain passed through as `-g`.
    pub gain: f64,
    /// Smallest block size as a power-of-two exponent.
    pub min_block_shift: u32,
    /// Largest block size as a power-of-two exponent (inclusive).
    pub max_block_shift: u32,
    /// Block size for the fixed time-mode row.
    pub time_block: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            exe: PathBuf::new(),
            input: PathBuf::from("input.wav"),
            impulse_response: PathBuf::from("ir.wav"),
            wav_out: PathBuf::from("out.wav"),
            results: PathBuf::from("runtime.csv"),
            repetitions: 100,
            gain: 0.1,
            min_block_shift: 8,
            max_block_shift: 16,
            time_block: 1024,
        }
    }
}

impl SweepConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, SweepError> {
        let text = std::fs::read_to_string(path).map_err(|source| SweepError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| SweepError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject configs that cannot produce a meaningful sweep.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.exe.as_os_str().is_empty() {
            return Err(SweepError::MissingExecutable);
        }
        if self.min_block_shift > self.max_block_shift {
            return Err(SweepError::InvalidShiftRange {
                min: self.min_block_shift,
                max: self.max_block_shift,
            });
        }
        if self.max_block_shift > MAX_BLOCK_SHIFT {
            return Err(SweepError::ShiftTooLarge {
                shift: self.max_block_shift,
                max: MAX_BLOCK_SHIFT,
            });
        }
        if self.repetitions == 0 {
            return Err(SweepError::ZeroRepetitions);
        }
        Ok(())
    }
}
