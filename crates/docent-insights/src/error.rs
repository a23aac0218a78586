use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("Seed data is malformed: {0}")]
    Seed(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Unsupported file {path}: only image uploads can be audited")]
    UnsupportedFile { path: PathBuf },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
