pub mod charset;
pub mod error;
pub mod matrix;
pub mod metadata;

pub use charset::*;
pub use error::*;
pub use matrix::*;
pub use metadata::*;
