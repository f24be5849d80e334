// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::{self, Debug, Display};

use futures::channel::mpsc::UnboundedSender;
use pagecraft_core::{Path, Spa, UiMsgOf};

/// Something for the app to handle, which arrived from outside of `update`.
pub(crate) enum Event<S: Spa> {
    Msg(UiMsgOf<S>),
    Navigate(Path),
}

/// A handle which lets code outside of the app's pages send it messages.
///
/// This is how integrations feed the app, for instance a browser's history
/// changes or a websocket which is owned by the embedder. Events sent through a
/// proxy are handled by the next call to
/// [`App::run_until_stalled`](crate::App::run_until_stalled).
pub struct AppProxy<S: Spa> {
    sender: UnboundedSender<Event<S>>,
}

impl<S: Spa> AppProxy<S> {
    pub(crate) fn new(sender: UnboundedSender<Event<S>>) -> Self {
        Self { sender }
    }

    /// Send `msg` to the app.
    ///
    /// # Errors
    ///
    /// If the app has been dropped, in which case `msg` is returned.
    pub fn send(&self, msg: UiMsgOf<S>) -> Result<(), ProxyError<UiMsgOf<S>>> {
        self.sender
            .unbounded_send(Event::Msg(msg))
            .map_err(|err| match err.into_inner() {
                Event::Msg(msg) => ProxyError::DriverFinished(msg),
                Event::Navigate(_) => {
                    unreachable!("We know this is the value we just sent, which is a message")
                }
            })
    }

    /// Navigate the app to `path`.
    ///
    /// # Errors
    ///
    /// If the app has been dropped, in which case the path is returned.
    pub fn navigate(&self, path: impl Into<Path>) -> Result<(), ProxyError<Path>> {
        self.sender
            .unbounded_send(Event::Navigate(path.into()))
            .map_err(|err| match err.into_inner() {
                Event::Navigate(path) => ProxyError::DriverFinished(path),
                Event::Msg(_) => {
                    unreachable!("We know this is the value we just sent, which is a navigation")
                }
            })
    }

    /// Whether the app this proxy sends to has been dropped.
    pub fn is_finished(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<S: Spa> Clone for AppProxy<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Spa> Debug for AppProxy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppProxy")
            .field("is_finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}

/// The reason an [`AppProxy`] could not deliver a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyError<T> {
    /// The app has been dropped, so nothing will handle the value.
    ///
    /// This contains the value which couldn't be delivered.
    DriverFinished(T),
}

impl<T> ProxyError<T> {
    /// The value which couldn't be delivered.
    pub fn into_inner(self) -> T {
        match self {
            Self::DriverFinished(value) => value,
        }
    }
}

impl<T> Display for ProxyError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverFinished(_) => f.write_str("the app has already finished"),
        }
    }
}

impl<T: Debug> Error for ProxyError<T> {}
