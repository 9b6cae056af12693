use crate::config::SweepConfig;
use crate::errors::SweepError;
use crate::progress::Reporter;
use crate::sink::CsvSink;

/// Mode token for the block-size sweep rows.
const FREQ_MODE: &str = "freq";
/// Mode token and row label for the fixed wall-clock measurement.
const TIME_MODE: &str = "time";

/// One experimental condition: a row label plus the full command line that
/// produces its trials. Immutable once built.
#[derive(Debug, Clone)]
pub struct ConfigPoint {
    pub label: String,
    pub argv: Vec<String>,
}

/// One result row: the point's label and exactly `repetitions` trial
/// outcomes in the order the trials ran. `None` is an extraction miss — a
/// first-class absence, never conflated with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentRow {
    pub label: String,
    pub outcomes: Vec<Option<u64>>,
}

/// Build the declared sweep space: one freq-mode point per block size
/// `2^min_block_shift ..= 2^max_block_shift`, then the fixed time-mode
/// point. The time row differs in meaning (wall-clock mode rather than a
/// block-size sample) but runs through the same mechanism.
pub fn build_points(cfg: &SweepConfig) -> Vec<ConfigPoint> {
    let mut points =
        Vec::with_capacity((cfg.max_block_shift.saturating_sub(cfg.min_block_shift) + 2) as usize);

    for shift in cfg.min_block_shift..=cfg.max_block_shift {
        let block = 1u64 << shift;
        points.push(ConfigPoint {
            label: block.to_string(),
            argv: build_argv(cfg, FREQ_MODE, block),
        });
    }

    points.push(ConfigPoint {
        label: TIME_MODE.to_string(),
        argv: build_argv(cfg, TIME_MODE, u64::from(cfg.time_block)),
    });

    points
}

fn build_argv(cfg: &SweepConfig, mode: &str, block: u64) -> Vec<String> {
    vec![
        cfg.exe.to_string_lossy().into_owned(),
        "-t".to_string(),
        mode.to_string(),
        "-g".to_string(),
        cfg.gain.to_string(),
        "-b".to_string(),
        block.to_string(),
        "-i".to_string(),
        cfg.input.to_string_lossy().into_owned(),
        "-r".to_string(),
        cfg.impulse_response.to_string_lossy().into_owned(),
        "-o".to_string(),
        cfg.wav_out.to_string_lossy().into_owned(),
    ]
}

/// Run all trials for one configuration point, strictly in sequence.
///
/// The invoker and extractor are injected so the mechanism is reusable (and
/// testable) independent of the real process boundary. An invoker error is
/// fatal and propagates; an extraction miss is recorded as `None` and the
/// point keeps going, so the row always has exactly `repetitions` outcomes.
pub fn run_point<I, E>(
    point: &ConfigPoint,
    invoke: I,
    extract: E,
    repetitions: u32,
    reporter: &mut dyn Reporter,
) -> Result<ExperimentRow, SweepError>
where
    I: Fn(&[String]) -> Result<String, SweepError>,
    E: Fn(&str) -> Option<u64>,
{
    reporter.point_started(&point.label, u64::from(repetitions));

    let mut outcomes = Vec::with_capacity(repetitions as usize);
    for _ in 0..repetitions {
        let stdout = invoke(&point.argv)?;
        outcomes.push(extract(&stdout));
        reporter.trial_finished();
    }

    reporter.point_finished();

    Ok(ExperimentRow {
        label: point.label.clone(),
        outcomes,
    })
}

/// Run the whole sweep: open the sink (truncating any previous run), walk
/// every configuration point in order, and stream each finished row out
/// before the next point starts. Returns the number of rows written.
pub fn run_sweep<I, E>(
    cfg: &SweepConfig,
    invoke: I,
    extract: E,
    reporter: &mut dyn Reporter,
) -> Result<usize, SweepError>
where
    I: Fn(&[String]) -> Result<String, SweepError>,
    E: Fn(&str) -> Option<u64>,
{
    let mut sink = CsvSink::create(&cfg.results)?;

    let points = build_points(cfg);
    for point in &points {
        let row = run_point(point, &invoke, &extract, cfg.repetitions, reporter)?;
        sink.write_row(&row)?;
    }

    sink.finish()?;
    Ok(points.len())
}
