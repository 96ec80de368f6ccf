// ---------------------------------------------------------------------------
// Line predicate: which lines of the energies file carry no data
// ---------------------------------------------------------------------------

/// Prefix the simulation's windowing layer puts in front of its log lines.
pub const INFO_PREFIX: &str = "INFO";

/// Whether a raw line is log chatter rather than an energy value.
///
/// The match is on the untrimmed line: `"INFO"` and `"INFO: init"` are
/// skipped, `"  INFO"` is not and will fail to parse.
pub fn is_info_line(line: &str) -> bool {
    line.starts_with(INFO_PREFIX)
}
