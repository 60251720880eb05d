//! A process-wide [`Resolvers`] instance.
//!
//! Code that cannot thread a `Resolvers` handle through its call graph can
//! install one at startup and reach it from anywhere. The instance is set at
//! most once and lives until the process exits.

use crate::{Error, Resolvers, Result};

use std::sync::OnceLock;

static GLOBAL: OnceLock<Resolvers> = OnceLock::new();

/// Installs the process-wide instance.
///
/// Fails if an instance was already installed. The rejected instance is
/// dropped.
pub fn install(resolvers: Resolvers) -> Result<&'static Resolvers> {
    let mut fresh = false;
    let installed = GLOBAL.get_or_init(|| {
        fresh = true;
        resolvers
    });

    if !fresh {
        return Err(Error::already_installed());
    }

    log::debug!(target: "sqlmeta::global", "installed global resolvers");

    Ok(installed)
}

/// The process-wide instance, if one was installed.
pub fn get() -> Option<&'static Resolvers> {
    GLOBAL.get()
}
