use crate::types::Rejection;
use serde::{Deserialize, Serialize};

/// Fewest discs a session may be configured with
pub const MIN_DISCS: u8 = 3;
/// Most discs a session may be configured with
pub const MAX_DISCS: u8 = 9;
/// Disc count of a freshly created engine
pub const DEFAULT_DISCS: u8 = 4;

/// Configuration for a new engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of discs stacked at the start of each session
    pub disc_count: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disc_count: DEFAULT_DISCS,
        }
    }
}

impl EngineConfig {
    /// Create a configuration, refusing disc counts outside `MIN_DISCS..=MAX_DISCS`
    pub fn new(disc_count: u8) -> Result<Self, Rejection> {
        let config = Self { disc_count };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are playable
    pub fn validate(&self) -> Result<(), Rejection> {
        if (MIN_DISCS..=MAX_DISCS).contains(&self.disc_count) {
            Ok(())
        } else {
            Err(Rejection::DiscCountOutOfRange(self.disc_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.disc_count, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        assert!(EngineConfig::new(3).is_ok());
        assert!(EngineConfig::new(9).is_ok());
        assert_eq!(
            EngineConfig::new(2),
            Err(Rejection::DiscCountOutOfRange(2))
        );
        assert_eq!(
            EngineConfig::new(10),
            Err(Rejection::DiscCountOutOfRange(10))
        );
    }

    #[test]
    fn test_deserialize() {
        let config: EngineConfig = serde_json::from_str(r#"{"disc_count":7}"#).unwrap();
        assert_eq!(config, EngineConfig { disc_count: 7 });
    }
}
