//! Unit catalog loading

use super::ConfigError;
use crate::catalog::{UnitCatalog, UnitDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Container for unit definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(rename = "units")]
    pub units: Vec<UnitDefinition>,
}

/// Load a unit catalog from a TOML file
pub fn load_unit_catalog(path: &Path) -> Result<UnitCatalog, ConfigError> {
    let config: UnitsConfig = super::load_toml(path)?;
    build_catalog(config)
}

/// Load a unit catalog from a TOML string
pub fn parse_unit_catalog(content: &str) -> Result<UnitCatalog, ConfigError> {
    let config: UnitsConfig = super::parse_toml(content)?;
    build_catalog(config)
}

/// The reference catalog shipped with the crate
pub fn default_catalog() -> Result<UnitCatalog, ConfigError> {
    let toml = include_str!("../../config/units.toml");
    parse_unit_catalog(toml)
}

fn build_catalog(config: UnitsConfig) -> Result<UnitCatalog, ConfigError> {
    let mut catalog = UnitCatalog::new();
    for unit in config.units {
        validate_unit(&unit)?;
        let name = unit.name.clone();
        if catalog.insert(unit).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate unit name: {}",
                name
            )));
        }
    }

    debug!(units = catalog.len(), "Loaded unit catalog");
    Ok(catalog)
}

fn validate_unit(unit: &UnitDefinition) -> Result<(), ConfigError> {
    if unit.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Unit name must not be empty".to_string(),
        ));
    }

    let stats = [
        ("attack", unit.base_attack),
        ("defense", unit.base_defense),
        ("hp", unit.base_hp),
    ];
    for (stat, value) in stats {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "Unit {} has invalid {}: {}",
                unit.name, stat, value
            )));
        }
    }

    if let Some(effect) = unit.special_effect {
        if !effect.amount().is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "Unit {} has invalid special effect amount: {}",
                unit.name,
                effect.amount()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SpecialEffect, UnitCategory};

    #[test]
    fn test_parse_units() {
        let toml = r#"
[[units]]
name = "Ritter"
attack = 10
defense = 35
hp = 150

[[units]]
name = "Vampirlords"
attack = 30
defense = 22
hp = 380
category = "vampire"

[[units]]
name = "General"
attack = 20
defense = 60
hp = 400
special = { type = "boost_defense", amount = 5 }
"#;

        let catalog = parse_unit_catalog(toml).unwrap();
        assert_eq!(catalog.len(), 3);

        let ritter = catalog.get("Ritter").unwrap();
        assert_eq!(ritter.category, UnitCategory::Normal);
        assert!(ritter.special_effect.is_none());

        let lords = catalog.get("Vampirlords").unwrap();
        assert_eq!(lords.category, UnitCategory::Vampire);

        let general = catalog.get("General").unwrap();
        assert_eq!(general.special_effect, Some(SpecialEffect::BoostDefense(5.0)));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let toml = r#"
[[units]]
name = "Ritter"
attack = 10
defense = 35
hp = 150

[[units]]
name = "Ritter"
attack = 1
defense = 1
hp = 1
"#;

        let result = parse_unit_catalog(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("Duplicate")));
    }

    #[test]
    fn test_rejects_negative_stats() {
        let toml = r#"
[[units]]
name = "Geist"
attack = -1
defense = 0
hp = 0
"#;

        let result = parse_unit_catalog(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let toml = r#"
[[units]]
name = "Geist"
attack = 1
defense = 1
hp = 1
category = "ghost"
"#;

        assert!(matches!(parse_unit_catalog(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 19, "Expected 19 units from config");

        let expected = [
            "Ritter",
            "Heiler",
            "General",
            "Vampirkrieger",
            "Vampirmagier",
            "Vampirlords",
            "Elraslehrling",
            "Elrasmagier",
            "Schattengeister",
            "Söldner",
            "Werwölfe",
            "Diebinnen",
            "Hauptmann",
            "Feldkoch",
            "Heiltrank",
            "Stahlschwerter",
            "Rüstungen",
            "Flammentränke",
            "Skelette",
        ];

        for name in expected {
            assert!(catalog.contains(name), "Missing unit: {}", name);
        }
    }
}
