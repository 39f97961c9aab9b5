#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown or unsupported architecture `{0}`.")]
    UnknownArch(String),

    #[error("Unknown or unsupported operating system `{0}`.")]
    UnknownOS(String),
}
