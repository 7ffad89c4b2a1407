//! JSON file store for registered addresses.
//!
//! Each operation reads the file, applies its change in memory and commits by
//! writing a sibling temporary file that is renamed over the original. A
//! failed operation leaves the file as it was.

use super::validate::{check_for_duplicates, validate_address, validate_hosts};
use crate::error::RegistryError;
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout of the registry file.
#[derive(Serialize, Deserialize, Debug, Default)]
struct RegistryData {
    records: Vec<Record>,
}

impl RegistryData {
    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    fn position(&self, address: &str) -> Option<usize> {
        self.records.iter().position(|r| r.address == address)
    }
}

/// Handle on a registry file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Open the registry at `path`, creating an empty one if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Registry, RegistryError> {
        let registry = Registry {
            path: path.as_ref().to_path_buf(),
        };
        if !registry.path.exists() {
            log::warn!("Registry file not found, creating: {}", registry.path.display());
            registry.commit(&RegistryData::default())?;
        }
        Ok(registry)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, ordered by id.
    pub fn fetch_all(&self) -> Result<Vec<Record>, RegistryError> {
        let mut records = self.load()?.records;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    /// Register `address` with its host count.
    ///
    /// Fails with [`RegistryError::Duplicate`] when the address is already
    /// registered; the file is left unchanged.
    pub fn insert(&self, address: &str, hosts_needed: u32) -> Result<Record, RegistryError> {
        let address = address.trim();
        validate_address(address)?;
        validate_hosts(hosts_needed)?;

        self.transaction(|data| {
            if data.position(address).is_some() {
                return Err(RegistryError::Duplicate(address.to_string()));
            }
            let record = Record {
                id: data.next_id(),
                address: address.to_string(),
                hosts_needed,
            };
            data.records.push(record.clone());
            log::info!("Inserted {record}");
            Ok(record)
        })
    }

    /// Change the host count of `address`. Returns `false` if it is unknown.
    pub fn update_hosts(&self, address: &str, hosts_needed: u32) -> Result<bool, RegistryError> {
        let address = address.trim();
        self.transaction(|data| match data.position(address) {
            Some(i) => {
                data.records[i].hosts_needed = hosts_needed;
                log::info!("Updated {}", data.records[i]);
                Ok(true)
            }
            None => {
                log::debug!("update_hosts: no record for '{address}'");
                Ok(false)
            }
        })
    }

    /// Remove `address`. Returns `false` if it is unknown.
    pub fn delete(&self, address: &str) -> Result<bool, RegistryError> {
        let address = address.trim();
        self.transaction(|data| match data.position(address) {
            Some(i) => {
                let record = data.records.remove(i);
                log::info!("Deleted {record}");
                Ok(true)
            }
            None => {
                log::debug!("delete: no record for '{address}'");
                Ok(false)
            }
        })
    }

    /// Apply `change` to the loaded data, committing only on success.
    fn transaction<T, F>(&self, change: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut RegistryData) -> Result<T, RegistryError>,
    {
        let mut data = self.load()?;
        match change(&mut data) {
            Ok(value) => {
                self.commit(&data)?;
                Ok(value)
            }
            Err(e) => {
                log::debug!("Rolled back change to {}: {e}", self.path.display());
                Err(e)
            }
        }
    }

    fn load(&self) -> Result<RegistryData, RegistryError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| RegistryError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let data: RegistryData =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
                RegistryError::Parse {
                    path: self.path.clone(),
                    message: format!("path={} error={}", e.path(), e),
                }
            })?;

        check_for_duplicates(&data.records)?;
        log::debug!(
            "Loaded {} records from {}",
            data.records.len(),
            self.path.display()
        );
        Ok(data)
    }

    fn commit(&self, data: &RegistryData) -> Result<(), RegistryError> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&tmp, json).map_err(|source| RegistryError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| RegistryError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
