use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::IntlConfig;
use crate::error::RuntimeResult;

pub fn load_catalog(path: &Path) -> RuntimeResult<Catalog> {
    let contents = fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&contents)?;
    log::debug!("loaded {} message(s) from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn load_config(path: &Path) -> RuntimeResult<IntlConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    log::debug!("loaded intl config from {}", path.display());
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<IntlConfig> {
    if path.exists() {
        load_config(path)
    } else {
        log::debug!("{} not found, using default intl config", path.display());
        Ok(IntlConfig::default())
    }
}
