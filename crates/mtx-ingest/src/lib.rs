pub mod csv_ingest;

pub use csv_ingest::{read_samples, read_samples_csv};
