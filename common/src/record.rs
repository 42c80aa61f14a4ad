use std::{fs, io, path::Path, str::FromStr};

use tracing::debug;

use crate::error::ReportError;

/// A typed row of a whitespace-delimited results file.
pub trait Record: Sized {
    /// Number of whitespace-separated tokens per line.
    const COLUMNS: usize;

    /// Converts one line's tokens into a record. `tokens` has exactly
    /// [`Record::COLUMNS`] entries. Returns a human-readable reason on
    /// failure; the reader attaches the path and line number.
    fn from_tokens(tokens: &[&str]) -> Result<Self, String>;
}

pub fn parse_token<T: FromStr>(token: &str, column: &str) -> Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("invalid {column} {token:?}"))
}

/// Reads every non-empty line of `path` as one record, preserving file order.
/// An absent file maps to [`ReportError::MissingInput`]; a bad line aborts
/// the whole read with [`ReportError::MalformedRecord`].
pub fn read_records<R: Record>(path: &Path) -> Result<Vec<R>, ReportError> {
    let data = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReportError::MissingInput(path.to_path_buf()),
        _ => ReportError::Io(err),
    })?;

    let mut records = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != R::COLUMNS {
            return Err(ReportError::MalformedRecord {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("expected {} fields, got {}", R::COLUMNS, tokens.len()),
            });
        }
        let record = R::from_tokens(&tokens).map_err(|reason| ReportError::MalformedRecord {
            path: path.to_path_buf(),
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }
    debug!("{}: {} records", path.display(), records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair {
        count: u32,
        rate: f64,
    }

    impl Record for Pair {
        const COLUMNS: usize = 2;

        fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
            Ok(Self {
                count: parse_token(tokens[0], "count")?,
                rate: parse_token(tokens[1], "rate")?,
            })
        }
    }

    #[test]
    fn reads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        write(&path, "3 1200.5\n1 999\n2 0\n").unwrap();

        let records: Vec<Pair> = read_records(&path).unwrap();
        assert_eq!(
            records,
            vec![
                Pair {
                    count: 3,
                    rate: 1200.5
                },
                Pair {
                    count: 1,
                    rate: 999.0
                },
                Pair { count: 2, rate: 0.0 },
            ]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        write(&path, "\n3 1.0\n   \n4 2.0\n\n").unwrap();

        let records: Vec<Pair> = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_distinguishable() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<Pair>, _> = read_records(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ReportError::MissingInput(_))));
    }

    #[test]
    fn wrong_field_count_reports_the_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        write(&path, "1 2.0\n1 2.0 3.0\n").unwrap();

        let result: Result<Vec<Pair>, _> = read_records(&path);
        match result {
            Err(ReportError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_token_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        write(&path, "one 2.0\n").unwrap();

        let result: Result<Vec<Pair>, _> = read_records(&path);
        match result {
            Err(ReportError::MalformedRecord { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("count"));
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }
}
