// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! [LICENSE]: https://github.com/pagecraft-rs/pagecraft/blob/main/pagecraft_core/LICENSE
//!
//! [`static_page`]: crate::static_page
//! [`sandbox`]: crate::sandbox
//! [`element`]: crate::element
//! [`component`]: crate::component
//! [`recipe`]: crate::recipe()
//! [`Recipe`]: crate::Recipe
//! [`layout`]: crate::layout()
//! [`Transition`]: crate::Transition
//! [`keep`]: crate::keep
//! [`Cmd`]: crate::Cmd
//!
//! <style>
//! .rustdoc-hidden { display: none; }
//! </style>
#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![deny(clippy::trivially_copy_pass_by_ref)]
extern crate alloc;

mod cmd;
pub use cmd::{Cmd, Effect, PendingMsg, Sub, Subscription, send};

mod context;
pub use context::{Context, PageContext, Path, PrivateContext};

mod spa;
pub use spa::{GlobalMsgMapper, Spa, UiMsg, UiMsgOf};

mod view;
pub use view::MapMessage;

mod update;
pub use update::{Update, keep};

mod recipe;
pub use recipe::{Bundle, Recipe, RecipeUpdate};

pub mod page;
pub use page::{
    Component, Element, Page, PageModel, PageRecipe, Sandbox, StaticPage, component, element,
    recipe, sandbox, static_page,
};

mod layout;
pub use layout::{Chrome, Layout, layout};

pub mod transition;
pub use transition::{Status, Transition, TransitionRecord, TransitionTracker, Visibility};
