#![forbid(unsafe_code)]

mod config;
mod entry;
mod server;
mod support;

use bt_storage::SqliteStore;
use config::ServerConfig;
use server::Server;
use tracing_subscriber::EnvFilter;

const SERVER_NAME: &str = "bt_server";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn usage() -> &'static str {
    "bt_server — bowling tournament store (newline JSON over stdio)\n\n\
USAGE:\n\
  bt_server [--storage-dir DIR] [--log FILTER] [--busy-timeout-ms N]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
ENV:\n\
  BT_STORAGE_DIR       Store directory (default: .bt_store)\n\
  BT_LOG               Log filter written to stderr (default: info)\n\
  BT_BUSY_TIMEOUT_MS   SQLite busy timeout in ms (default: 5000)\n"
}

fn version_line() -> String {
    format!("{SERVER_NAME} {SERVER_VERSION}")
}

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let config = ServerConfig::parse(args, |key| std::env::var(key).ok())?;
    init_tracing(&config.log_filter);

    let store = SqliteStore::open_with(&config.storage_dir, config.store_options())?;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        version = SERVER_VERSION,
        "server started"
    );

    let mut server = Server::new(store);
    entry::run_stdio(&mut server)
}
