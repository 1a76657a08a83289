pub mod options;

pub use options::{CgOptions, GdOptions};
