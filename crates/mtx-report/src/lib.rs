pub mod export;

pub use export::{
    write_annotated_samples, write_annotated_samples_csv, write_dme_patients,
    write_dme_patients_csv,
};
