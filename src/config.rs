//! Constants and environment-driven settings.
//!
//! `main` loads a `.env` file with dotenv before calling [`Settings::from_env`].

use std::error::Error;
use std::path::PathBuf;

/// Registry file used when none is configured.
pub const DEFAULT_REGISTRY_FILE: &str = "subnet_registry.json";
/// log4rs configuration file looked up at startup.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Most /32 units the index view will enumerate for a single record.
pub const DEFAULT_MAX_UNITS: u64 = 65_536;
/// Interface named in exported device configurations.
pub const DEFAULT_INTERFACE: &str = "FastEthernet0/0";

pub const ENV_REGISTRY_FILE: &str = "SUBNET_REGISTRY_FILE";
pub const ENV_MAX_UNITS: &str = "SUBNET_MAX_UNITS";
pub const ENV_INTERFACE: &str = "SUBNET_INTERFACE";

/// Runtime settings, resolved from the environment then overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub registry_file: PathBuf,
    /// `None` disables the cap.
    pub max_units: Option<u64>,
    pub interface: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            registry_file: PathBuf::from(DEFAULT_REGISTRY_FILE),
            max_units: Some(DEFAULT_MAX_UNITS),
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(file) = lookup(ENV_REGISTRY_FILE) {
            settings.registry_file = PathBuf::from(file);
        }
        if let Some(max_units) = lookup(ENV_MAX_UNITS) {
            settings.max_units = parse_max_units(&max_units)?;
        }
        if let Some(interface) = lookup(ENV_INTERFACE) {
            settings.interface = interface;
        }

        log::debug!("settings {:?}", settings);
        Ok(settings)
    }
}

/// Parse a unit cap; `0` means unlimited.
pub fn parse_max_units(value: &str) -> Result<Option<u64>, Box<dyn Error>> {
    let n: u64 = value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {ENV_MAX_UNITS} '{value}': {e}"))?;
    Ok((n > 0).then_some(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_settings_default() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_units, Some(DEFAULT_MAX_UNITS));
        assert_eq!(settings.interface, "FastEthernet0/0");
    }

    #[test]
    fn test_settings_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_REGISTRY_FILE, "/tmp/reg.json"),
            (ENV_MAX_UNITS, "0"),
            (ENV_INTERFACE, "GigabitEthernet0/1"),
        ]);
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(settings.registry_file, PathBuf::from("/tmp/reg.json"));
        assert_eq!(settings.max_units, None);
        assert_eq!(settings.interface, "GigabitEthernet0/1");
    }

    #[test]
    fn test_parse_max_units() {
        assert_eq!(parse_max_units("1024").unwrap(), Some(1024));
        assert_eq!(parse_max_units(" 0 ").unwrap(), None);
        assert!(parse_max_units("lots").is_err());
        assert!(parse_max_units("-1").is_err());
    }
}
