mod export;
mod persistence;

pub use export::{write_program_csv, write_schema_csv};
pub use persistence::{load_program_input, load_schema, save_schema};
