use crate::error::PkcsError;
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 环境变量前缀, e.g. `PKCS1__MODULUS_BITS=3072`
pub const ENV_PREFIX: &str = "PKCS1";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PkcsConfig {
    // RSA modulus size in bits
    pub modulus_bits: usize,

    // Miller-Rabin rounds per prime candidate
    pub prime_test_rounds: usize,
}

impl Default for PkcsConfig {
    fn default() -> Self {
        Self {
            modulus_bits: 2048,
            prime_test_rounds: 50,
        }
    }
}

impl PkcsConfig {
    pub const MIN_MODULUS_BITS: usize = 512;
    pub const MIN_PRIME_TEST_ROUNDS: usize = 50;

    /// process-wide configuration from the defaults and the environment
    pub fn config() -> Result<&'static Self, PkcsError> {
        Self::config_with_file(None)
    }

    /// The first successful call fixes the process-wide configuration, later calls
    /// return it unchanged whatever `f` is.
    pub fn config_with_file(f: Option<&Path>) -> Result<&'static Self, PkcsError> {
        static CONFIG: OnceLock<PkcsConfig> = OnceLock::new();

        if let Some(c) = CONFIG.get() {
            return Ok(c);
        }

        let c = Self::load(f)?;
        Ok(CONFIG.get_or_init(|| c))
    }

    /// defaults <- file `f` <- environment
    pub fn load(f: Option<&Path>) -> Result<Self, PkcsError> {
        let default_config = Config::try_from(&PkcsConfig::default())?;

        let mut config = Config::builder().add_source(default_config);
        if let Some(f) = f {
            config = config.add_source(config::File::from(f).required(true));
        }
        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .separator("__"),
        );

        let config: PkcsConfig = config.build()?.try_deserialize()?;
        config.validate()?;

        log::debug!("{:?}", config);

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PkcsError> {
        if self.modulus_bits < Self::MIN_MODULUS_BITS || self.modulus_bits % 16 != 0 {
            return Err(PkcsError::InvalidConfig(format!(
                "modulus_bits `{}` must be a multiple of 16 and at least {}",
                self.modulus_bits,
                Self::MIN_MODULUS_BITS
            )));
        }

        if self.prime_test_rounds < Self::MIN_PRIME_TEST_ROUNDS {
            return Err(PkcsError::InvalidConfig(format!(
                "prime_test_rounds `{}` must be at least {}",
                self.prime_test_rounds,
                Self::MIN_PRIME_TEST_ROUNDS
            )));
        }

        Ok(())
    }
}
