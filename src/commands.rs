//! Execution of the command-line commands.
//!
//! Each command returns the text to print so it can be tested without a
//! terminal. The registry is opened per command and released when it returns.

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::RegistryError;
use crate::output::{export_configuration, render_descriptors, render_index, render_records};
use crate::processing::try_decompose;
use crate::registry::Registry;
use crate::{dump_registry, index_view};
use colored::Colorize;
use std::error::Error;

/// Apply command-line overrides on top of environment settings.
pub fn resolve_settings(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(registry) = &cli.registry {
        settings.registry_file = registry.clone();
    }
    match &cli.command {
        Commands::List {
            max_units: Some(n), ..
        } => settings.max_units = (*n > 0).then_some(*n),
        Commands::Decompose { limit: Some(n), .. } => settings.max_units = (*n > 0).then_some(*n),
        Commands::ExportConfig {
            interface: Some(interface),
            ..
        } => settings.interface = interface.clone(),
        _ => {}
    }
    settings
}

/// Run the selected command and return its output.
pub fn run(cli: &Cli, settings: &Settings) -> Result<String, Box<dyn Error>> {
    log::debug!("run({:?})", cli.command);

    match &cli.command {
        Commands::Add { address, hosts } => {
            let registry = Registry::open(&settings.registry_file)?;
            match registry.insert(address, *hosts) {
                Ok(record) => Ok(format!("Registered {record}")),
                Err(RegistryError::Duplicate(address)) => {
                    log::warn!("Duplicate address '{address}', nothing changed");
                    Ok(format!(
                        "{} address '{address}' is already registered, nothing changed",
                        "warning:".yellow()
                    ))
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::List { format, .. } => {
            let registry = Registry::open(&settings.registry_file)?;
            let views = index_view(&registry, settings.max_units)?;
            render_index(&views, format.format())
        }
        Commands::Edit { address, hosts } => {
            let registry = Registry::open(&settings.registry_file)?;
            if registry.update_hosts(address, *hosts)? {
                Ok(format!("Updated '{address}' to {hosts} hosts"))
            } else {
                log::warn!("Edit of unknown address '{address}'");
                Ok(format!("{} no record for '{address}'", "warning:".yellow()))
            }
        }
        Commands::Delete { address } => {
            let registry = Registry::open(&settings.registry_file)?;
            if registry.delete(address)? {
                Ok(format!("Deleted '{address}'"))
            } else {
                log::warn!("Delete of unknown address '{address}'");
                Ok(format!("{} no record for '{address}'", "warning:".yellow()))
            }
        }
        Commands::Dump => {
            let registry = Registry::open(&settings.registry_file)?;
            let records = dump_registry(&registry)?;
            Ok(render_records(&records))
        }
        Commands::ExportConfig { ip, .. } => export_configuration(ip, &settings.interface)
            .map_err(|e| -> Box<dyn Error> {
                format!("Configuration not found for IP address '{ip}': {e}").into()
            }),
        Commands::Decompose {
            network,
            hosts,
            format,
            ..
        } => {
            let descriptors = try_decompose(network, *hosts, settings.max_units)?;
            render_descriptors(network, &descriptors, format.format())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("subnet-decomposer").chain(args.iter().copied()))
            .expect("valid command line")
    }

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            registry_file: dir.path().join("registry.json"),
            ..Settings::default()
        }
    }

    #[test]
    fn test_resolve_settings() {
        let base = Settings::default();
        let resolved = resolve_settings(
            &cli(&["-r", "x.json", "list", "--max-units", "0"]),
            base.clone(),
        );
        assert_eq!(resolved.registry_file, std::path::PathBuf::from("x.json"));
        assert_eq!(resolved.max_units, None);

        let resolved = resolve_settings(
            &cli(&["decompose", "10.0.0.0/24", "1", "--limit", "10"]),
            base.clone(),
        );
        assert_eq!(resolved.max_units, Some(10));

        let resolved = resolve_settings(
            &cli(&["export-config", "10.0.0.1", "--interface", "Gi0/1"]),
            base.clone(),
        );
        assert_eq!(resolved.interface, "Gi0/1");

        assert_eq!(resolve_settings(&cli(&["dump"]), base.clone()), base);
    }

    #[test]
    fn test_add_list_edit_delete() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);

        let out = run(&cli(&["add", "192.168.1.0/30", "1"]), &settings).unwrap();
        assert!(out.contains("192.168.1.0/30"));

        let out = run(&cli(&["add", "192.168.1.0/30", "4"]), &settings).unwrap();
        assert!(out.contains("already registered"));

        let out = run(&cli(&["list", "--csv"]), &settings).unwrap();
        assert_eq!(out.lines().count(), 5);

        run(&cli(&["edit", "192.168.1.0/30", "3"]), &settings).unwrap();
        let out = run(&cli(&["list", "--json"]), &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["record"]["hosts_needed"], 3);
        assert_eq!(value[0]["descriptors"][0]["last"], "192.168.1.3");

        let out = run(&cli(&["edit", "10.9.9.9", "3"]), &settings).unwrap();
        assert!(out.contains("no record"));

        run(&cli(&["delete", "192.168.1.0/30"]), &settings).unwrap();
        let out = run(&cli(&["dump"]), &settings).unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_add_invalid_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        assert!(run(&cli(&["add", "bogus", "1"]), &settings).is_err());
        assert!(run(&cli(&["add", "10.0.0.0/24", "0"]), &settings).is_err());
    }

    #[test]
    fn test_export_config() {
        let settings = Settings::default();
        let out = run(&cli(&["export-config", "10.0.0.1"]), &settings).unwrap();
        assert!(out.contains("ip address 10.0.0.1/32"));

        let err = run(&cli(&["export-config", "not-an-ip"]), &settings).unwrap_err();
        assert!(err.to_string().starts_with("Configuration not found"));
    }

    #[test]
    fn test_decompose_command() {
        let settings = Settings::default();
        let out = run(&cli(&["decompose", "192.168.1.0/30", "1", "--csv"]), &settings).unwrap();
        assert_eq!(out.lines().count(), 5);

        let settings = Settings {
            max_units: Some(4),
            ..Settings::default()
        };
        assert!(run(&cli(&["decompose", "192.168.1.0/29", "1"]), &settings).is_err());
        assert!(run(&cli(&["decompose", "nonsense", "1"]), &settings).is_err());
    }
}
