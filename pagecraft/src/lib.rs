// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! [`Program`]: crate::Program
//! [`App`]: crate::App
//! [`AppProxy`]: crate::AppProxy
//! [`Cmd`]: pagecraft_core::Cmd
//! [`Sub`]: pagecraft_core::Sub
//! [`pagecraft_core`]: pagecraft_core
//! [`tracing_backend`]: crate::tracing_backend
//!
//! <style>
//! .rustdoc-hidden { display: none; }
//! </style>
#![doc = include_str!("../README.md")]
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET

pub use pagecraft_core as core;
pub use pagecraft_core::{
    Bundle, Chrome, Cmd, Component, Context, Effect, Element, MapMessage, Page, PageContext,
    PageModel, Path, PrivateContext, Recipe, Sandbox, Spa, StaticPage, Status, Sub, Transition,
    TransitionRecord, UiMsg, UiMsgOf, Update, Visibility, component, element, keep, layout,
    recipe, sandbox, send, static_page,
};

mod app;
pub use app::App;

mod options;
pub use options::AppOptions;

mod program;
pub use program::Program;

mod proxy;
pub use proxy::{AppProxy, ProxyError};

pub mod tracing_backend;
