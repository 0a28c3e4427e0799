use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "stayhub.toml";
const DEFAULT_SNAPSHOT_FILE_NAME: &str = "stayhub.json";

const ENV_NAME_SNAPSHOT: &str = "STAYHUB_SNAPSHOT";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
}

#[derive(Debug)]
pub struct Db {
    /// JSON snapshot file backing the in-memory store.
    pub snapshot: PathBuf,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(snapshot) = env::var(ENV_NAME_SNAPSHOT) {
            cfg.db.snapshot = snapshot.into();
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { db } = from;
        let raw::Db { snapshot } = db;
        Self {
            db: Db {
                snapshot: snapshot.unwrap_or_else(|| DEFAULT_SNAPSHOT_FILE_NAME.into()),
            },
        }
    }
}
