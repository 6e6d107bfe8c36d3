//! File I/O helpers

mod fs;

pub use fs::{FsError, ensure_parent_dir, parent_dir, write_atomic};
