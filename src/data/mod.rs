mod csv_loader;

pub use csv_loader::{DEFAULT_DATA_FILE, load, read_dataset};
