pub mod catalog;
pub mod error;

pub use catalog::*;
pub use error::{Error, Result};
