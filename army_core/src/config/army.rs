//! Army composition loading

use super::ConfigError;
use crate::army::ArmyComposition;
use std::path::Path;

/// Load an army composition from a TOML file
pub fn load_army(path: &Path) -> Result<ArmyComposition, ConfigError> {
    let army: ArmyComposition = super::load_toml(path)?;
    checked(army)
}

/// Load an army composition from a TOML string
pub fn parse_army(content: &str) -> Result<ArmyComposition, ConfigError> {
    let army: ArmyComposition = super::parse_toml(content)?;
    checked(army)
}

/// Load an army composition from a JSON string
pub fn parse_army_json(content: &str) -> Result<ArmyComposition, ConfigError> {
    let army: ArmyComposition = serde_json::from_str(content)?;
    checked(army)
}

fn checked(army: ArmyComposition) -> Result<ArmyComposition, ConfigError> {
    army.validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(army)
}
