// # hostdb - interactive name/address store
//
// This binary is a thin integration layer. All store, parsing and command
// logic lives in hostdb-core.
//
// The binary is responsible for:
// 1. Reading configuration from the environment (and an optional JSON file)
// 2. Initializing logging
// 3. Opening the store
// 4. Running the session on stdin/stdout until `quit`, end of input or a
//    shutdown signal
//
// ## Configuration
//
// - `HOSTDB_CONFIG`: Path to a JSON config file (optional)
// - `HOSTDB_DATABASE_FILE`: Path to the record file (overrides the file)
// - `HOSTDB_PROMPT`: Prompt printed before each line (default `> `)
// - `HOSTDB_BANNER`: Print the command summary on startup (default true)
// - `HOSTDB_LOG_LEVEL`: trace, debug, info, warn, error (default warn)
//
// Logs go to stderr; stdout carries only the protocol output.
//
// ## Example
//
// ```bash
// export HOSTDB_DATABASE_FILE=/var/lib/hostdb/hosts.txt
// echo "ls -a uvsq.fr" | hostdb
// ```

use anyhow::Result;
use hostdb_core::{HostDbConfig, HostStore, Session, SessionConfig, SessionEnd};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::task::JoinError;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit codes for different termination scenarios
///
/// - 0: `quit`, end of input or shutdown signal
/// - 1: Configuration or startup error (including an unreadable record file)
/// - 2: Runtime error (stdin/stdout failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostDbExitCode {
    CleanShutdown = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<HostDbExitCode> for ExitCode {
    fn from(code: HostDbExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    hostdb: HostDbConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, file first, then overrides
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut hostdb = match lookup("HOSTDB_CONFIG") {
            Some(path) => HostDbConfig::from_json_file(&path)?,
            None => HostDbConfig::default(),
        };

        if let Some(path) = lookup("HOSTDB_DATABASE_FILE") {
            hostdb.store.path = PathBuf::from(path);
        }
        if let Some(prompt) = lookup("HOSTDB_PROMPT") {
            hostdb.session.prompt = prompt;
        }
        if let Some(banner) = lookup("HOSTDB_BANNER") {
            hostdb.session.banner = parse_flag("HOSTDB_BANNER", &banner)?;
        }

        Ok(Self {
            hostdb,
            log_level: lookup("HOSTDB_LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.hostdb.store.path.as_os_str().is_empty() {
            anyhow::bail!(
                "HOSTDB_DATABASE_FILE is required. \
                Set it via: export HOSTDB_DATABASE_FILE=/var/lib/hostdb/hosts.txt \
                or point HOSTDB_CONFIG at a JSON file with store.path"
            );
        }
        self.hostdb.validate()?;

        if parse_level(&self.log_level).is_none() {
            anyhow::bail!(
                "HOSTDB_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{} must be true or false. Got: {}", key, value),
    }
}

fn parse_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return HostDbExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return HostDbExitCode::ConfigError.into();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&config.log_level).unwrap_or(Level::WARN))
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return HostDbExitCode::ConfigError.into();
    }

    info!("Starting hostdb");

    // A record file that exists but cannot be read is fatal
    let path = &config.hostdb.store.path;
    let store = match HostStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open {}: {}", path.display(), e);
            eprintln!("FATAL: {}", e);
            return HostDbExitCode::ConfigError.into();
        }
    };
    info!("Loaded {} record(s) from {}", store.len(), path.display());

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return HostDbExitCode::RuntimeError.into();
        }
    };

    let code = rt.block_on(run(store, config.hostdb.session));

    // The stdin reader may still be blocked on a read after a signal
    rt.shutdown_background();

    code.into()
}

/// Run the session until it ends or a shutdown signal arrives
async fn run(store: HostStore, session_config: SessionConfig) -> HostDbExitCode {
    let mut session = tokio::task::spawn_blocking(move || {
        let mut session = Session::new(
            store,
            io::stdin().lock(),
            io::stdout().lock(),
            session_config,
        );
        session.run()
    });

    tokio::select! {
        joined = &mut session => finish(joined),

        shutdown = wait_for_shutdown() => match shutdown {
            Ok(name) => {
                info!("Received shutdown signal: {}", name);
                HostDbExitCode::CleanShutdown
            }
            Err(e) => {
                warn!("{}. Continuing without signal handling.", e);
                finish(session.await)
            }
        },
    }
}

fn finish(
    joined: std::result::Result<hostdb_core::Result<SessionEnd>, JoinError>,
) -> HostDbExitCode {
    match joined {
        Ok(Ok(end)) => {
            info!("Session ended: {:?}", end);
            HostDbExitCode::CleanShutdown
        }
        Ok(Err(e)) => {
            error!("Session error: {}", e);
            HostDbExitCode::RuntimeError
        }
        Err(e) => {
            error!("Session task failed: {}", e);
            HostDbExitCode::RuntimeError
        }
    }
}

/// Wait for SIGTERM or SIGINT
#[cfg(unix)]
async fn wait_for_shutdown() -> Result<&'static str> {
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

/// Wait for CTRL-C
///
/// Fallback implementation for non-Unix platforms.
#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
