mod env;
mod error;

pub use env::*;
pub use error::*;
