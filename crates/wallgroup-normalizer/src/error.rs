use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("failed to compile {context} pattern: {source}")]
    Pattern {
        context: String,
        #[source]
        source: regex::Error,
    },
}
