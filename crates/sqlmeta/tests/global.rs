mod support;
use support::*;

use sqlmeta::{global, Flavor};
use std_util::prelude::*;

// Installation is process-wide, so everything lives in a single test.
#[test]
fn install_once() {
    assert!(global::get().is_none());

    let installed = assert_ok!(global::install(resolvers()));
    let table = assert_ok!(installed.table_for::<Customer>(&Flavor::SqlServer));
    assert_eq!(table.name, "[customers]");

    let current = assert_some!(global::get());
    assert!(std::ptr::eq(installed, current));

    let err = assert_err!(global::install(resolvers()));
    assert!(err.is_already_installed());
    assert_eq!(
        err.to_string(),
        "a global resolver instance is already installed"
    );

    // The first instance, and its cache, survive the rejected install.
    let again = assert_ok!(assert_some!(global::get()).table_for::<Customer>(&Flavor::SqlServer));
    assert!(std::sync::Arc::ptr_eq(&table, &again));
}
