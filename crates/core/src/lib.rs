pub mod cache;
pub mod catalog;
pub mod downloader;
pub mod env;
pub mod error;
pub mod helpers;
pub mod installer;
pub mod locator;
pub mod platform;
pub mod process;
pub mod resolver;
pub mod setup;

pub use cache::*;
pub use catalog::*;
pub use env::*;
pub use error::*;
pub use platform::*;
pub use resolver::*;
pub use setup::*;
pub use system_env::{SystemArch, SystemOS};
pub use version_spec::{UnresolvedVersionSpec, VersionSpec};
