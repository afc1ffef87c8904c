pub mod dates;
pub mod environment;
pub mod terminal;

pub use dates::{is_valid_date, random_date, today};
pub use environment::resolve_data_dir;
