mod install;
mod list_remote;
mod resolve;

pub use install::*;
pub use list_remote::*;
pub use resolve::*;
