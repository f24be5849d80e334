// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for a Pagecraft application.
//!
//! This prints compact logs to the console, timestamped in UTC with millisecond precision.
//! It uses a default filter, which can be overwritten using `RUST_LOG`.
//! This will include all [`DEBUG`](tracing::Level::DEBUG) messages in debug mode,
//! and all [`INFO`](tracing::Level::INFO) level messages in release mode.
//! Each dispatched message is logged at [`TRACE`](tracing::Level::TRACE), so
//! `RUST_LOG=pagecraft=trace` shows the full message flow.
//!
//! If a `tracing` backend is already configured, this will not overwrite that.

use std::error::Error;
use std::fmt;

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Constructs a default tracing subscriber with a given `default_level` filter.
///
/// Returns the subscriber, and the error in case of a (recoverable) error.
pub fn default_tracing_subscriber(
    default_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    // Use EnvFilter to allow the user to override the log level without recompiling.
    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    let err = env_filter_builder
        .from_env()
        .err()
        .map(|err| format!("failed to parse RUST_LOG environment variable: {err:#}").into());
    let env_filter = env_filter_builder.from_env_lossy();

    // Page transitions are short, so we print the time of day with millisecond
    // precision, and skip the date and the target.
    let timer = UtcTime::new(format_description!(
        // We append a `Z` here to indicate clearly that this is a UTC time
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    // If modifying, also update the module level docs
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false)
        .with_filter(env_filter);

    (tracing_subscriber::registry().with(console_layer), err)
}

/// An Error indicating that a tracing subscriber has been set before.
#[derive(Debug)]
pub struct TracingSubscriberHasBeenSetError;

impl fmt::Display for TracingSubscriberHasBeenSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad("A tracing subscriber has been set before.")
    }
}

impl Error for TracingSubscriberHasBeenSetError {}

/// Verify that a tracing subscriber has not been set before or return with an error.
fn verify_subscriber_has_not_been_set() -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden), but `tracing`'s own macros rely on it.
    if tracing::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    Ok(())
}

/// Initialise tracing with a default subscriber for a unit test.
/// This ignores most messages to limit noise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // For unit tests we want to suppress most messages.
    let default_level = LevelFilter::WARN;

    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // We may ignore potential errors here because we already checked that no subscriber has been set.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!(err, "Logging init had recoverable error");
    }

    Ok(())
}

/// Initialise tracing with a default subscriber for an end-user application.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // Default level is DEBUG in --dev, INFO in --release.
    // DEBUG logs every navigation and transition, INFO only noteworthy things.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // We may ignore potential errors here because we already checked that no subscriber has been set.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!("Initialising logging encountered recoverable error: {err}");
    }

    Ok(())
}
