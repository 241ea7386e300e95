//! Session config loader (strict parsing).

pub mod schema;

use std::fs;

use tlwire_core::error::{Result, TlError};

pub use schema::{SessionConfig, SessionLimits};

pub fn load_from_file(path: &str) -> Result<SessionConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TlError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SessionConfig> {
    let cfg: SessionConfig =
        serde_yaml::from_str(s).map_err(|e| TlError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
