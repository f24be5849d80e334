// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! The four page builder variants, and the recipe which composes them.
//!
//! Pages come in four levels of capability, and a page should use the least capable
//! variant which does what it needs:
//!
//! | Variant | Model | Local commands | Global commands |
//! |---|---|---|---|
//! | [`static_page`] | `()` | no | no |
//! | [`sandbox`] | any | no | no |
//! | [`element`] | any | yes | no |
//! | [`component`] | any | yes | yes |
//!
//! Every callback of every variant receives the [`PageContext`], with the global model,
//! the route and the page's parameters. Pages which don't need it ignore the argument.
//!
//! Each variant implements [`Page`], and becomes a [`Recipe`](crate::Recipe) with
//! [`recipe`].

use alloc::string::String;

use crate::{PageContext, Spa, Sub, Update};

mod component;
mod element;
mod page_recipe;
mod sandbox;
mod static_page;

pub use component::{Component, component};
pub use element::{Element, element};
pub use page_recipe::{PageModel, PageRecipe, recipe};
pub use sandbox::{Sandbox, sandbox};
pub use static_page::{StaticPage, static_page};

/// The lifecycle of one page, in terms of its own model and message types.
///
/// This is implemented by the builder variants of this module. Outputs are local to
/// the page; [`recipe`] injects them into the application's composite types.
pub trait Page<S: Spa> {
    /// The parameters the router extracted for this page.
    type Params;
    /// The page's state.
    type Model;
    /// The messages the page's view and commands produce.
    type Msg;
    /// The view tree, producing [`Msg`](Self::Msg).
    type View;

    /// The document title.
    fn title(&self, model: &Self::Model, ctx: &PageContext<'_, S, Self::Params>) -> String;

    /// Create the model when the page becomes active.
    fn init(
        &self,
        ctx: &PageContext<'_, S, Self::Params>,
    ) -> Update<Self::Model, Self::Msg, S::GlobalMsg>;

    /// Handle a message of this page.
    fn update(
        &self,
        msg: Self::Msg,
        model: Self::Model,
        ctx: &PageContext<'_, S, Self::Params>,
    ) -> Update<Self::Model, Self::Msg, S::GlobalMsg>;

    /// Render the model.
    fn view(&self, model: &Self::Model, ctx: &PageContext<'_, S, Self::Params>) -> Self::View;

    /// The external events the page listens to. Nothing, unless overridden.
    fn subscriptions(
        &self,
        model: &Self::Model,
        ctx: &PageContext<'_, S, Self::Params>,
    ) -> Sub<Self::Msg> {
        let _ = (model, ctx);
        Sub::none()
    }
}
