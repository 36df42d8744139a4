pub mod app_config;
pub mod catalog;
pub mod config;
pub mod vocabulary;

pub use app_config::{AppConfig, Environment};
pub use catalog::CatalogItem;
pub use config::{load_app_config, load_app_config_from_env};
pub use vocabulary::{load_vocabulary, Vocabulary, VocabularyFile, VocabularyMode};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabularyFileParse(#[from] serde_yaml::Error),

    #[error("vocabulary validation failed: {0}")]
    Validation(String),
}
