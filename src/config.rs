use std::env;
use std::path::PathBuf;

use crate::database::connection::get_database_url;

/// Runtime configuration for the catalog core. The boundary layer builds one
/// of these (usually via [`CatalogConfig::from_env`]) and hands the pieces to
/// the services it constructs.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database_url: String,
    /// Root directory the studio image store writes under. Images land in
    /// `{asset_root}/images/studios/`.
    pub asset_root: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_url: get_database_url(None),
            asset_root: PathBuf::from("wwwroot"),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("BACKLOT_DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| get_database_url(None));

        let asset_root = env::var("BACKLOT_ASSET_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("wwwroot"));

        Self {
            database_url,
            asset_root,
        }
    }
}
