//! Materialize PostgreSQL foreign tables into local tables.
//!
//! A foreign table `schema.table` is renamed to `schema.table_foreign`, a
//! local table with the same shape takes over the original name, and the
//! foreign rows are copied in. The copy can be refreshed later, or the whole
//! thing reverted so the foreign table owns its name again.
//!
//! ## Actions
//!
//! - [`Action::Create`] — rename, create, populate
//! - [`Action::Refresh`] — truncate, repopulate
//! - [`Action::Revert`] — drop, rename back
//!
//! ## Execution
//!
//! - [`execute()`] — connect with [`Params`] and run one action in one transaction
//! - [`Executor`] — the same run against any [`Session`]
//! - [`quote()`] — identifier quoting used for every name in every statement
mod action;
mod error;
mod executor;
mod params;
mod session;
mod target;

#[cfg(feature = "cli")]
pub mod cli;

pub use action::*;
pub use error::*;
pub use executor::*;
pub use params::*;
pub use session::*;
pub use target::*;

/// Initialize terminal logging, plus a timestamped log file when
/// `MATERIALIZE_LOG_DIR` is set.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if let Ok(dir) = std::env::var(LOG_DIR) {
        std::fs::create_dir_all(&dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let path = std::path::Path::new(&dir).join(format!("{}.log", time));
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Environment variable naming an optional directory for log files.
#[cfg(feature = "cli")]
pub const LOG_DIR: &str = "MATERIALIZE_LOG_DIR";
