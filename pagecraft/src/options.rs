// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

/// Configuration of an [`App`](crate::App).
///
/// ```
/// use pagecraft::AppOptions;
///
/// let options = AppOptions::default().with_max_messages_per_flush(100);
/// assert_eq!(options.max_messages_per_flush(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    max_messages_per_flush: usize,
}

impl AppOptions {
    /// The number of queued messages which are handled before the app yields, by default.
    pub const DEFAULT_MAX_MESSAGES_PER_FLUSH: usize = 10_000;

    /// Set how many queued messages are handled before the app yields.
    ///
    /// A page which keeps sending itself messages would otherwise never let the app
    /// return. Messages over the budget stay queued, and are handled by the next call
    /// which drives the app.
    ///
    /// # Panics
    ///
    /// If `max` is zero.
    #[track_caller]
    pub fn with_max_messages_per_flush(mut self, max: usize) -> Self {
        assert!(max > 0, "an app must be able to handle at least one message");
        self.max_messages_per_flush = max;
        self
    }

    /// How many queued messages are handled before the app yields.
    pub fn max_messages_per_flush(&self) -> usize {
        self.max_messages_per_flush
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            max_messages_per_flush: Self::DEFAULT_MAX_MESSAGES_PER_FLUSH,
        }
    }
}
