//! Append-only JSON-lines store for disagreement records.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::record::Disagreement;

#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Append one record as a single JSON line, creating the file on first
/// use. Records are never rewritten.
pub fn append_record(path: &Path, record: &Disagreement) -> Result<(), LogError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(record)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// A parsed log: readable records plus the count of lines that failed
/// to parse.
#[derive(Debug, Default)]
pub struct LoadedLog {
    pub records: Vec<Disagreement>,
    pub skipped: usize,
}

/// Read a whole log. Malformed lines are counted and skipped, never
/// fatal; blank lines are ignored outright.
pub fn load_log(path: &Path) -> Result<LoadedLog, LogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut loaded = LoadedLog::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => loaded.records.push(record),
            Err(_) => loaded.skipped += 1,
        }
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DirectionScore;
    use std::fs;
    use std::path::PathBuf;
    use tessera_core::{Board, Direction};

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("tessera-log-{}-{}.jsonl", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    fn sample_record(turn: u32) -> Disagreement {
        let board = Board::EMPTY.with_cell(0, 1).with_cell(1, 1);
        Disagreement {
            turn,
            board,
            human: Direction::Down,
            engine: Direction::Left,
            scores: [
                DirectionScore {
                    direction: Direction::Left,
                    fitness: Some(53.0),
                },
                DirectionScore {
                    direction: Direction::Up,
                    fitness: None,
                },
                DirectionScore {
                    direction: Direction::Right,
                    fitness: Some(53.0),
                },
                DirectionScore {
                    direction: Direction::Down,
                    fitness: Some(44.0),
                },
            ],
        }
    }

    #[test]
    fn test_append_then_load() {
        let path = scratch_path("roundtrip");
        append_record(&path, &sample_record(3)).expect("append");
        append_record(&path, &sample_record(9)).expect("append");

        let loaded = load_log(&path).expect("load");
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.records[0].turn, 3);
        assert_eq!(loaded.records[1].turn, 9);
        assert_eq!(loaded.records[0].deficit(), Some(9.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let path = scratch_path("malformed");
        append_record(&path, &sample_record(1)).expect("append");
        {
            let mut file = OpenOptions::new().append(true).open(&path).expect("open");
            writeln!(file, "{{ not json").expect("write");
            writeln!(file).expect("write");
            writeln!(file, "[1,2,3]").expect("write");
        }
        append_record(&path, &sample_record(2)).expect("append");

        let loaded = load_log(&path).expect("load");
        assert_eq!(loaded.records.len(), 2);
        // the blank line is ignored, the two bad payloads are counted
        assert_eq!(loaded.skipped, 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = scratch_path("absent");
        assert!(load_log(&path).is_err());
    }
}
