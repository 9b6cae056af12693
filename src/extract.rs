use std::sync::OnceLock;

use regex::Regex;

fn trailing_ns_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anchored at the end of the whole capture so an earlier diagnostic line
    // that happens to contain "<digits> ns." cannot win over the real
    // measurement. Trailing whitespace and newlines are tolerated.
    RE.get_or_init(|| Regex::new(r"(\d+) ns\.\s*$").unwrap())
}

/// Pull the nanosecond measurement out of one trial's captured stdout.
///
/// The benchmarked program is expected to end its output with a line like
/// `523771 ns.`. Returns `None` when no such trailing line exists — an
/// extraction miss is an expected, recoverable outcome, never an error and
/// never a zero. This is the default extraction policy; the sweep driver
/// accepts any `Fn(&str) -> Option<u64>`, so benchmarking a program with a
/// different output format only means swapping this function.
pub fn trailing_nanos(stdout: &str) -> Option<u64> {
    trailing_ns_re()
        .captures(stdout)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}
