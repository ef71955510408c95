#![forbid(unsafe_code)]

use bt_storage::StoreOptions;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_STORAGE_DIR: &str = ".bt_store";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid busy timeout: {0:?}")]
    InvalidBusyTimeout(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Flags win over env vars, env vars over defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub(crate) storage_dir: PathBuf,
    pub(crate) log_filter: String,
    pub(crate) busy_timeout: Duration,
}

impl ServerConfig {
    pub(crate) fn parse<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut storage_dir: Option<String> = None;
        let mut log_filter: Option<String> = None;
        let mut busy_timeout_ms: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, slot) = match arg.as_str() {
                "--storage-dir" => ("--storage-dir", &mut storage_dir),
                "--log" => ("--log", &mut log_filter),
                "--busy-timeout-ms" => ("--busy-timeout-ms", &mut busy_timeout_ms),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            };
            *slot = Some(args.next().ok_or(ConfigError::MissingValue(flag))?);
        }

        let storage_dir = storage_dir
            .or_else(|| env("BT_STORAGE_DIR"))
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));
        let log_filter = log_filter
            .or_else(|| env("BT_LOG"))
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let busy_timeout_ms = match busy_timeout_ms.or_else(|| env("BT_BUSY_TIMEOUT_MS")) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidBusyTimeout(raw))?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Self {
            storage_dir,
            log_filter,
            busy_timeout: Duration::from_millis(busy_timeout_ms),
        })
    }

    pub(crate) fn store_options(&self) -> StoreOptions {
        StoreOptions {
            busy_timeout: self.busy_timeout,
        }
    }
}
