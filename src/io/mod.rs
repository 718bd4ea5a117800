pub mod compare;
pub mod csv;

pub use compare::{relative_errors, ErrorPoint, WARMUP_SAMPLES};
pub use csv::{read_series, write_series, write_series_file, CsvError};
