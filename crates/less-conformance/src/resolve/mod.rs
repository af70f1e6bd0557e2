//! Best-effort resolution of leaf values and source file names.

mod filename;
mod value;

pub use filename::{UNKNOWN_FILE, resolve_file_name};
pub use value::{resolve, resolve_list};
