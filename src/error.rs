use cipher::CipherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkcsError {
    #[error("{0}")]
    Cipher(#[from] CipherError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl PkcsError {
    /// Numeric PKCS error code (1..=10), `None` for configuration and key shape errors.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Cipher(e) => e.code(),
            _ => None,
        }
    }
}
