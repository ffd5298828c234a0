//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Where the catalog and coupon fixtures are read from.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Directory holding `catalog/` and `coupons/` fixture files
    #[arg(long, env = "FIXTURES_PATH", default_value = "./fixtures")]
    pub fixtures_path: PathBuf,

    /// Fixture set name
    #[arg(long, env = "FIXTURE_SET", default_value = "default")]
    pub fixture_set: String,
}
