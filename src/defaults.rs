use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::ConfigError, route::Address};

/// The origin/destination pair reused when no addresses are given.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Defaults {
    pub origin: Address,
    pub destination: Address,
}

/// Missing or unreadable defaults are treated the same as none saved. Anything
/// other than a missing file is logged as a warning.
pub fn load(path: &Path) -> Option<Defaults> {
    let data = match read_saved(path) {
        Ok(Some(data)) => data,
        Ok(None) => {
            debug!(path = %path.display(), "no saved defaults");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read defaults file");
            return None;
        }
    };

    match serde_json::from_slice(&data) {
        Ok(defaults) => Some(defaults),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed defaults file");
            None
        }
    }
}

fn read_saved(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Overwrites the defaults file, creating its directory if needed.
pub fn save(path: &Path, defaults: &Defaults) -> Result<(), ConfigError> {
    let write = || -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_vec(defaults)?)
    };

    write().map_err(|source| ConfigError::SaveDefaults {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved defaults");
    Ok(())
}

/// Addresses given on the command line win; with neither given, fall back to
/// whatever was saved. `path` is only consulted in the fallback case.
pub fn resolve(
    origin: Option<Address>,
    destination: Option<Address>,
    path: impl FnOnce() -> Result<PathBuf, ConfigError>,
) -> Result<Defaults, ConfigError> {
    match (origin, destination) {
        (Some(origin), Some(destination)) => Ok(Defaults {
            origin,
            destination,
        }),
        (None, None) => load(&path()?).ok_or(ConfigError::NoAddresses),
        _ => Err(ConfigError::IncompleteAddresses),
    }
}
