use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use config::{File, FileFormat};
use courier_models::pagination::PageSize;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon-separated list of config files, applied in order.
pub const CONFIG_PATH_ENV: &str = "COURIER_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    let paths: Vec<PathBuf> = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(paths.as_slice())
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    parse(&sources)
}

fn parse(sources: &[impl AsRef<str>]) -> anyhow::Result<Config> {
    let config: Config = sources
        .iter()
        .fold(config::Config::builder(), |builder, content| {
            builder.add_source(File::from_str(content.as_ref(), FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub pagination: PaginationConfig,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        let pagination = &self.pagination;
        ensure!(
            pagination
                .page_size_options
                .contains(&pagination.default_page_size),
            "pagination.default_page_size ({}) must be one of pagination.page_size_options",
            pagination.default_page_size
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct PaginationConfig {
    pub default_page_size: PageSize,
    pub page_size_options: Vec<PageSize>,
    pub sibling_limit: u64,
}
