// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{self, Debug};
use core::marker::PhantomData;

use crate::transition::{self, Visibility};
use crate::{Bundle, Context, GlobalMsgMapper, Path, PrivateContext, Recipe, Spa, UiMsgOf, Update};

/// What a layout's chrome function receives to draw the frame around its page.
pub struct Chrome<'a, S: Spa> {
    /// The wrapped page's view, with its transition already applied.
    pub page: S::View,
    /// The global model.
    pub global: &'a S::Global,
    /// The current route.
    pub route: &'a S::Route,
    /// Lifts global messages into the view's message type, for controls in the chrome
    /// which act on the global model (such as a "sign out" button).
    pub from_global_msg: GlobalMsgMapper<S>,
}

impl<S: Spa> Chrome<'_, S> {
    /// Lift `msg` into the view's message type.
    pub fn global_msg(&self, msg: S::GlobalMsg) -> UiMsgOf<S> {
        (self.from_global_msg)(msg)
    }
}

impl<S: Spa> Debug for Chrome<'_, S>
where
    S::View: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chrome")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

/// A recipe wrapped in shared chrome, see [`layout`].
pub struct Layout<S, R, F> {
    path: Path,
    chrome: F,
    recipe: R,
    phantom: PhantomData<fn() -> S>,
}

/// Wrap `recipe` in the frame drawn by `chrome`, producing a recipe one level up.
///
/// `init` and `update` are forwarded to `recipe` unchanged. When rendering, the
/// inner view is first styled by the transition registered for `path` (if any),
/// then handed to `chrome` in a [`Chrome`].
///
/// The transition only animates while `path` is the path which is navigating; in
/// every other case the inner view is styled as [`Visible`](Visibility::Visible), so
/// that the layouts around the navigating one stay still. Nested layouts are
/// independent: each one compares its own `path`.
///
/// # Examples
///
/// ```ignore
/// let docs = layout("/docs", |chrome: Chrome<'_, MyApp>| {
///     Node::column([navbar(chrome.global_msg(SessionMsg::SignOut)), chrome.page])
/// }, docs_pages());
/// ```
pub fn layout<S, R, F>(path: impl Into<Path>, chrome: F, recipe: R) -> Layout<S, R, F>
where
    S: Spa,
    R: Recipe<S>,
    F: Fn(Chrome<'_, S>) -> S::View,
{
    Layout {
        path: path.into(),
        chrome,
        recipe,
        phantom: PhantomData,
    }
}

impl<S, R, F> Layout<S, R, F> {
    /// The path this layout's transition is registered for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The wrapped recipe.
    pub fn inner(&self) -> &R {
        &self.recipe
    }
}

impl<S, R, F> Recipe<S> for Layout<S, R, F>
where
    S: Spa,
    R: Recipe<S>,
    R::ParentMsg: 'static,
    F: Fn(Chrome<'_, S>) -> S::View,
{
    type Params = R::Params;
    type Model = R::Model;
    type Msg = R::Msg;
    type ParentModel = R::ParentModel;
    type ParentMsg = R::ParentMsg;

    fn init(
        &self,
        params: Self::Params,
        ctx: &Context<'_, S>,
    ) -> Update<Self::ParentModel, Self::ParentMsg, S::GlobalMsg> {
        self.recipe.init(params, ctx)
    }

    fn update(
        &self,
        msg: Self::Msg,
        model: Self::Model,
        ctx: &Context<'_, S>,
    ) -> Update<Self::ParentModel, Self::ParentMsg, S::GlobalMsg> {
        self.recipe.update(msg, model, ctx)
    }

    fn bundle(
        &self,
        model: &Self::Model,
        private: &PrivateContext<'_, S, Self::ParentMsg>,
        ctx: &Context<'_, S>,
    ) -> Bundle<S::View, Self::ParentMsg> {
        let inner = self.recipe.bundle(model, private, ctx);
        let visibility = if *private.path() == self.path {
            private.visibility()
        } else {
            Visibility::Visible
        };
        let transition = transition::lookup(private.transitions(), &self.path);
        if transition.is_opt_out() {
            tracing::trace!(path = %self.path, "No transition registered for layout");
        }
        let page = transition.apply(visibility, inner.view);
        Bundle {
            title: inner.title,
            view: (self.chrome)(Chrome {
                page,
                global: ctx.global,
                route: ctx.route,
                from_global_msg: private.global_msg_mapper(),
            }),
            subscriptions: inner.subscriptions,
        }
    }
}

impl<S, R: Debug, F> Debug for Layout<S, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("path", &self.path)
            .field("recipe", &self.recipe)
            .finish_non_exhaustive()
    }
}
