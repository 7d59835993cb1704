// Error types for configuration loading and dependency probes

use thiserror::Error;

/// Error raised by a failed health check
#[derive(Debug, Error)]
pub enum CheckError {
    /// A required environment variable is missing
    #[error("{0} environment variable not set")]
    Config(&'static str),

    /// The database was unreachable or rejected the probe
    #[error("{0}")]
    Database(String),

    /// Any failure while reaching the storage bucket, from a missing
    /// credentials file to a network fault
    #[error("{0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for CheckError {
    fn from(err: sea_orm::DbErr) -> Self {
        CheckError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_passes_through_underlying_text() {
        let err = CheckError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");

        let err = CheckError::Storage("No such file or directory".to_string());
        assert_eq!(err.to_string(), "No such file or directory");
    }

    #[test]
    fn config_display_names_the_variable() {
        let err = CheckError::Config("DATABASE_URL");
        assert_eq!(err.to_string(), "DATABASE_URL environment variable not set");
    }

    #[test]
    fn db_errors_convert_to_database_variant() {
        let err: CheckError = sea_orm::DbErr::Custom("boom".to_string()).into();
        match err {
            CheckError::Database(msg) => assert!(msg.contains("boom")),
            other => panic!("expected database variant, got {:?}", other),
        }
    }
}
