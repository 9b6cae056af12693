use std::process::Command;

use crate::errors::SweepError;

/// Run one trial of the external program and capture its stdout as text.
///
/// `argv` is a pass-through command line: the program path first, then its
/// flags and values, none of which the harness interprets. The call blocks
/// until the child terminates; stdout is decoded lossily. A spawn failure or
/// a non-success exit status is fatal to the whole sweep — a row built on a
/// broken binary would be meaningless — so it surfaces as `SweepError`
/// instead of an absent measurement. stderr is captured only to enrich that
/// error message.
pub fn capture_stdout(argv: &[String]) -> Result<String, SweepError> {
    let (program, args) = argv.split_first().ok_or(SweepError::EmptyCommand)?;

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| SweepError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(SweepError::AbnormalExit {
            program: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
