// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use pagecraft_core::{
    Bundle, Cmd, Context, Path, PrivateContext, Spa, Sub, TransitionRecord, Update,
};

/// An application which can be run by an [`App`](crate::App).
///
/// This is where the pieces of an application meet: the router, the global model, and
/// the dispatch over the union of all pages. The page-level methods are usually a single
/// `match` each, delegating to the application's [recipes](pagecraft_core::Recipe):
///
/// ```ignore
/// fn update(
///     &self,
///     msg: Msg,
///     model: Model,
///     ctx: &Context<'_, Self>,
/// ) -> Update<Model, Msg, SessionMsg> {
///     match (msg, model) {
///         (Msg::Counter(msg), Model::Counter(model)) => counter().update(msg, model, ctx),
///         (_, model) => keep(model),
///     }
/// }
/// ```
pub trait Program: Spa + Sized {
    /// The union of every page's model.
    type Model;

    /// Match `path` to a route.
    ///
    /// This never fails: paths which don't match any page should produce the
    /// application's "not found" route.
    fn parse_route(&self, path: &Path) -> Self::Route;

    /// Create the global model, when the application starts on `route`.
    fn init_global(&self, route: &Self::Route) -> (Self::Global, Cmd<Self::GlobalMsg>);

    /// Handle a global message.
    ///
    /// This is the only place where the global model is changed.
    fn update_global(
        &self,
        msg: Self::GlobalMsg,
        global: &mut Self::Global,
        route: &Self::Route,
    ) -> Cmd<Self::GlobalMsg>;

    /// The external events the global model is listening to.
    fn global_subscriptions(&self, global: &Self::Global) -> Sub<Self::GlobalMsg> {
        let _ = global;
        Sub::none()
    }

    /// Create the model of the page for the route in `ctx`.
    fn init(&self, ctx: &Context<'_, Self>) -> Update<Self::Model, Self::Msg, Self::GlobalMsg>;

    /// Dispatch `msg` to the active page.
    ///
    /// Messages which don't belong to the page in `model` should be dropped with
    /// [`keep`](pagecraft_core::keep).
    fn update(
        &self,
        msg: Self::Msg,
        model: Self::Model,
        ctx: &Context<'_, Self>,
    ) -> Update<Self::Model, Self::Msg, Self::GlobalMsg>;

    /// Render the active page.
    fn bundle(
        &self,
        model: &Self::Model,
        private: &PrivateContext<'_, Self, Self::Msg>,
        ctx: &Context<'_, Self>,
    ) -> Bundle<Self::View, Self::Msg>;

    /// The transitions of the application's layouts.
    ///
    /// This is read once, when the [`App`](crate::App) is created.
    fn transitions(&self) -> Vec<TransitionRecord<Self::View>> {
        Vec::new()
    }
}
