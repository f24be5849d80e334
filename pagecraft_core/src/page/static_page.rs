// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::{Page, PageContext, Spa, Update};

/// A page without state, see [`static_page`].
pub struct StaticPage<S, Params, Msg, V, TitleFn, ViewFn> {
    title: TitleFn,
    view: ViewFn,
    phantom: PhantomData<fn() -> (S, Params, Msg, V)>,
}

/// A page without state: its model is `()`, and it ignores every message.
///
/// The page can still read the context, so a static page can for instance greet the
/// signed-in user. `Msg` is only the message type of the view, and is usually
/// inferred from the injection the page is composed with.
///
/// # Examples
///
/// ```ignore
/// let about = static_page(
///     |_| "About".to_string(),
///     |ctx: &PageContext<'_, MyApp, ()>| Node::text(format!("Hello, {}", ctx.global.user)),
/// );
/// ```
pub fn static_page<S, Params, Msg, V, TitleFn, ViewFn>(
    title: TitleFn,
    view: ViewFn,
) -> StaticPage<S, Params, Msg, V, TitleFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&PageContext<'_, S, Params>) -> String,
    ViewFn: Fn(&PageContext<'_, S, Params>) -> V,
{
    StaticPage {
        title,
        view,
        phantom: PhantomData,
    }
}

impl<S, Params, Msg, V, TitleFn, ViewFn> Page<S> for StaticPage<S, Params, Msg, V, TitleFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&PageContext<'_, S, Params>) -> String,
    ViewFn: Fn(&PageContext<'_, S, Params>) -> V,
{
    type Params = Params;
    type Model = ();
    type Msg = Msg;
    type View = V;

    fn title(&self, _: &(), ctx: &PageContext<'_, S, Params>) -> String {
        (self.title)(ctx)
    }

    fn init(&self, _: &PageContext<'_, S, Params>) -> Update<(), Msg, S::GlobalMsg> {
        Update::new(())
    }

    fn update(
        &self,
        _: Msg,
        _: (),
        _: &PageContext<'_, S, Params>,
    ) -> Update<(), Msg, S::GlobalMsg> {
        Update::new(())
    }

    fn view(&self, _: &(), ctx: &PageContext<'_, S, Params>) -> V {
        (self.view)(ctx)
    }
}

impl<S, Params, Msg, V, TitleFn, ViewFn> fmt::Debug
    for StaticPage<S, Params, Msg, V, TitleFn, ViewFn>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticPage").finish_non_exhaustive()
    }
}
