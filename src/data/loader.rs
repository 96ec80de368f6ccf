use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use super::filter::is_info_line;
use super::model::EnergySeries;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the energies file at `path`.
///
/// The file handle lives only for the duration of this call.
pub fn load_file(path: &Path) -> Result<EnergySeries, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_energies(BufReader::new(file))?;
    info!("loaded {} energies from {}", series.len(), path.display());
    Ok(series)
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

/// Skip INFO lines and parse every other line as one `f64`.
///
/// Surrounding whitespace (including `\r`) is trimmed before parsing.
/// Any other content, a blank line included, is a [`LoadError::Parse`].
pub fn parse_energies<R: BufRead>(reader: R) -> Result<EnergySeries, LoadError> {
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        if is_info_line(&line) {
            skipped += 1;
            continue;
        }

        let text = line.trim();
        let value = text.parse::<f64>().map_err(|source| LoadError::Parse {
            line: line_no,
            text: text.to_string(),
            source,
        })?;
        values.push(value);
    }

    debug!("skipped {skipped} INFO lines");
    Ok(EnergySeries::new(values))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<EnergySeries, LoadError> {
        parse_energies(Cursor::new(text))
    }

    /// Write `text` to a fresh file under the system temp dir.
    fn temp_file(text: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "energy-plot-{}-{n}.txt",
            std::process::id()
        ));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn skips_info_and_keeps_order() {
        let series = parse("INFO: starting\n1.5\n2.25\n-3.0\n").unwrap();
        assert_eq!(series.values(), &[1.5, 2.25, -3.0]);
        let points: Vec<[f64; 2]> = series.points().collect();
        assert_eq!(points, vec![[0.0, 1.5], [1.0, 2.25], [2.0, -3.0]]);
    }

    #[test]
    fn interleaved_info_lines() {
        let text = "INFO: Initializing raylib\n-1e7\nINFO: TEXTURE: loaded\n-1.0000001e7\nINFO\n-9.9999e6\n";
        let series = parse(text).unwrap();
        assert_eq!(series.values(), &[-1e7, -1.0000001e7, -9.9999e6]);
    }

    #[test]
    fn bare_info_line_is_dropped() {
        let series = parse("INFO\n4\n").unwrap();
        assert_eq!(series.values(), &[4.0]);
    }

    #[test]
    fn empty_and_all_info_inputs_are_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("INFO: a\nINFO: b\nINFO").unwrap().is_empty());
    }

    #[test]
    fn crlf_and_padding_are_trimmed() {
        let series = parse("INFO: x\r\n  1.25\r\n2.5e-3 \r\n").unwrap();
        assert_eq!(series.values(), &[1.25, 2.5e-3]);
    }

    #[test]
    fn missing_trailing_newline() {
        assert_eq!(parse("1\n2").unwrap().values(), &[1.0, 2.0]);
    }

    #[test]
    fn non_numeric_line_fails() {
        match parse("abc\n") {
            Err(LoadError::Parse { line, text, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(text, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_counts_info_lines() {
        let err = parse("INFO: a\n1.0\nINFO: b\n2.0 J\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 4, .. }));
        assert_eq!(err.to_string(), "line 4: '2.0 J' is not a number");
    }

    #[test]
    fn blank_line_is_a_parse_error() {
        let err = parse("1.0\n\n2.0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn indented_info_is_not_skipped() {
        assert!(matches!(
            parse(" INFO: x\n"),
            Err(LoadError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn load_file_reads_from_disk_twice_identically() {
        let path = temp_file("INFO: starting\n1.5\n2.25\n-3.0\n");
        let first = load_file(&path).unwrap();
        let second = load_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.values(), &[1.5, 2.25, -3.0]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("energy-plot-does-not-exist.txt");
        match load_file(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
