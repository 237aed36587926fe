mod reader;

pub use reader::{COLUMNS, read_atoms};
