//! A process-wide context.
//!
//! Applications that do not want to pass a [`MapcodeContext`] around can
//! install one here once at startup. Installation is a one-shot
//! initialisation; every read afterwards is lock-free.

use std::sync::OnceLock;

use mapcode_engine::{ConfigError, ContextConfig, MapcodeContext};
use tracing::{info, warn};

static SHARED: OnceLock<MapcodeContext> = OnceLock::new();

/// Install `ctx` as the shared context.
///
/// Returns `ctx` back if a context was already installed.
pub fn install(ctx: MapcodeContext) -> Result<(), MapcodeContext> {
    match SHARED.set(ctx) {
        Ok(()) => {
            info!("shared mapcode context installed");
            Ok(())
        }
        Err(ctx) => {
            warn!("shared mapcode context already installed");
            Err(ctx)
        }
    }
}

/// Load a context from `config` and install it. Does nothing, and reads
/// no files, if a context is already installed.
pub fn install_from_config(config: &ContextConfig) -> Result<(), ConfigError> {
    if SHARED.get().is_some() {
        return Ok(());
    }
    let ctx = MapcodeContext::from_config(config)?;
    // Losing a race to another installer leaves theirs in place.
    let _ = install(ctx);
    Ok(())
}

/// The shared context, if one was installed.
pub fn get() -> Option<&'static MapcodeContext> {
    SHARED.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcode_test_utils::{fixture_bytes, fixture_catalog};

    #[test]
    fn installs_once() {
        let first = MapcodeContext::new(fixture_catalog(), &fixture_bytes()).unwrap();
        let second = first.clone();
        // Other tests in this binary do not touch the shared context.
        assert!(install(first).is_ok());
        assert!(install(second).is_err());
        assert_eq!(get().unwrap().catalog().len(), 7);

        let missing = ContextConfig::new("/nonexistent/data", "/nonexistent/catalog");
        assert!(install_from_config(&missing).is_ok());
    }
}
