use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML vocabulary merged onto the built-in tables at startup.
    pub vocabulary_path: Option<PathBuf>,
    /// Upper bound on trailing-token stripping passes per name.
    pub max_strip_passes: usize,
    /// Largest Levenshtein distance between adjacent group keys that the
    /// audit still reports as a suspected split group.
    pub audit_max_distance: usize,
}
