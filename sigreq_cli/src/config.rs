use std::env::var;

pub const DEFAULT_KEY_BITS: usize = 2048;

pub struct Config {
    /// Private key used by `request` and `sign` when `--secret` is absent
    pub secret_key: Option<String>,

    /// Modulus size for `keygen` when `--keysize` is absent
    pub key_bits: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|name| var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SIGREQ_SECRET_KEY").map(|path| crate::expand(&path));

        let key_bits = match lookup("SIGREQ_KEY_BITS") {
            Some(val) => val
                .parse()
                .map_err(|_| format!("SIGREQ_KEY_BITS must be a number of bits, got {}", val))?,
            None => DEFAULT_KEY_BITS,
        };

        Ok(Config {
            secret_key,
            key_bits,
        })
    }
}
