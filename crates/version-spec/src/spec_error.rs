#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("Invalid version constraint `{input}`: {error}")]
    InvalidConstraint {
        input: String,
        #[source]
        error: semver::Error,
    },

    #[error("Invalid version `{input}`: {error}")]
    InvalidVersion {
        input: String,
        #[source]
        error: semver::Error,
    },
}
