use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::sim::Sample;

// ---------------------------------------------------------------------------
// Telemetry series I/O
// ---------------------------------------------------------------------------
//
// Schema shared with the externally collected flight telemetry, so the
// downstream comparison can align the two series by index:
//
//   time,mass,altitude,speed
//
// with time in seconds, mass in metric tons, altitude in meters, speed in
// meters per second.

const HEADER: &str = "time,mass,altitude,speed";
const KG_PER_TON: f64 = 1000.0;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Write the sampled series with a header row.
pub fn write_series<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for s in samples {
        writeln!(
            writer,
            "{:.2},{:.3},{:.2},{:.2}",
            s.time,
            s.mass / KG_PER_TON,
            s.altitude,
            s.speed,
        )?;
    }
    Ok(())
}

/// Write the sampled series to a file at the given path.
pub fn write_series_file(path: &str, samples: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_series(&mut file, samples)
}

/// Read a series in the shared schema.
///
/// The header row is skipped, blank lines are ignored, and rows with fewer
/// than four fields are rejected. Mass comes back in kilograms to match
/// [`Sample`].
pub fn read_series<R: BufRead>(reader: R) -> Result<Vec<Sample>, CsvError> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 4 {
            return Err(CsvError::Malformed {
                line: idx + 1,
                reason: format!("expected 4 fields, got {}", fields.len()),
            });
        }
        let parse = |s: &str| -> Result<f64, CsvError> {
            s.parse().map_err(|_| CsvError::Malformed {
                line: idx + 1,
                reason: format!("not a number: {s:?}"),
            })
        };
        samples.push(Sample {
            time: parse(fields[0])?,
            mass: parse(fields[1])? * KG_PER_TON,
            altitude: parse(fields[2])?,
            speed: parse(fields[3])?,
        });
    }
    Ok(samples)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series() -> Vec<Sample> {
        vec![
            Sample { time: 1.0, mass: 312_000.0, altitude: 0.31, speed: 2.5 },
            Sample { time: 2.0, mass: 311_300.0, altitude: 1.52, speed: 7.75 },
        ]
    }

    #[test]
    fn writes_header_and_one_row_per_sample() {
        let mut buf = Vec::new();
        write_series(&mut buf, &series()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time,mass,altitude,speed");
        assert_eq!(lines[1], "1.00,312.000,0.31,2.50");
    }

    #[test]
    fn read_recovers_written_series() {
        let mut buf = Vec::new();
        write_series(&mut buf, &series()).unwrap();
        let back = read_series(buf.as_slice()).unwrap();
        assert_eq!(back.len(), 2);
        assert_relative_eq!(back[0].mass, 312_000.0);
        assert_relative_eq!(back[1].altitude, 1.52);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "time,mass,altitude,speed\n1.00,312.000,0.31,2.50\n\n";
        let back = read_series(text.as_bytes()).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn short_rows_are_rejected_with_the_line_number() {
        let text = "time,mass,altitude,speed\n1.00,312.000\n";
        match read_series(text.as_bytes()) {
            Err(CsvError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed-row error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let text = "time,mass,altitude,speed\n1.00,abc,0.31,2.50\n";
        assert!(matches!(
            read_series(text.as_bytes()),
            Err(CsvError::Malformed { .. })
        ));
    }
}
