use miette::Diagnostic;
use starbase_utils::fs::FsError;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum JuliaSetupCliError {
    #[diagnostic(transparent)]
    #[error(transparent)]
    Fs(#[from] Box<FsError>),

    #[diagnostic(code(julia_setup::cli::json))]
    #[error("Failed to format output as JSON.")]
    JsonOutput {
        #[source]
        error: Box<serde_json::Error>,
    },
}

impl From<FsError> for JuliaSetupCliError {
    fn from(e: FsError) -> JuliaSetupCliError {
        JuliaSetupCliError::Fs(Box::new(e))
    }
}
