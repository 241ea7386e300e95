use serde::Deserialize;
use tlwire_core::error::{Result, TlError};

/// Smallest packet limit that still fits a container header and one frame.
const MIN_PACKET_BYTES: usize = 64;
const MAX_PACKET_BYTES: usize = 16 * 1024 * 1024;
const MAX_CONTAINER_MESSAGES: usize = 8192;
const MAX_UNPACKED_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub version: u32,

    #[serde(default)]
    pub limits: SessionLimits,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TlError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.limits.validate()?;

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            version: 1,
            limits: SessionLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionLimits {
    #[serde(default = "default_max_packet_bytes")]
    pub max_packet_bytes: usize,

    #[serde(default = "default_max_container_messages")]
    pub max_container_messages: usize,

    /// Inflated size allowed for one gzip envelope.
    #[serde(default = "default_max_unpacked_bytes")]
    pub max_unpacked_bytes: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_packet_bytes: default_max_packet_bytes(),
            max_container_messages: default_max_container_messages(),
            max_unpacked_bytes: default_max_unpacked_bytes(),
        }
    }
}

impl SessionLimits {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PACKET_BYTES..=MAX_PACKET_BYTES).contains(&self.max_packet_bytes) {
            return Err(TlError::Config(format!(
                "limits.max_packet_bytes must be between {MIN_PACKET_BYTES} and {MAX_PACKET_BYTES}"
            )));
        }
        if !(1..=MAX_CONTAINER_MESSAGES).contains(&self.max_container_messages) {
            return Err(TlError::Config(format!(
                "limits.max_container_messages must be between 1 and {MAX_CONTAINER_MESSAGES}"
            )));
        }
        if !(MIN_PACKET_BYTES..=MAX_UNPACKED_BYTES).contains(&self.max_unpacked_bytes) {
            return Err(TlError::Config(format!(
                "limits.max_unpacked_bytes must be between {MIN_PACKET_BYTES} and {MAX_UNPACKED_BYTES}"
            )));
        }
        Ok(())
    }
}

fn default_max_packet_bytes() -> usize {
    1024 * 1024
}
fn default_max_container_messages() -> usize {
    1020
}
fn default_max_unpacked_bytes() -> usize {
    16 * 1024 * 1024
}
