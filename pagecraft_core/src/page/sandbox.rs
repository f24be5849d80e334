// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::{Page, PageContext, Spa, Update};

/// A page with pure state, see [`sandbox`].
pub struct Sandbox<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn> {
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    view: ViewFn,
    phantom: PhantomData<fn() -> (S, Params, Model, Msg, V)>,
}

/// A page with its own model, updated by pure functions.
///
/// Sandboxes can't run commands of any kind: `init` and `update` only compute the
/// next model.
///
/// # Examples
///
/// ```ignore
/// enum CounterMsg {
///     Increment,
///     Decrement,
/// }
///
/// let counter = sandbox(
///     |count: &i32, _| format!("Count: {count}"),
///     |_| 0,
///     |msg, count, _| match msg {
///         CounterMsg::Increment => count + 1,
///         CounterMsg::Decrement => count - 1,
///     },
///     |count, _| counter_view(*count),
/// );
/// ```
pub fn sandbox<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn>(
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    view: ViewFn,
) -> Sandbox<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> Model,
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> Model,
    ViewFn: Fn(&Model, &PageContext<'_, S, Params>) -> V,
{
    Sandbox {
        title,
        init,
        update,
        view,
        phantom: PhantomData,
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn> Page<S>
    for Sandbox<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> Model,
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> Model,
    ViewFn: Fn(&Model, &PageContext<'_, S, Params>) -> V,
{
    type Params = Params;
    type Model = Model;
    type Msg = Msg;
    type View = V;

    fn title(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> String {
        (self.title)(model, ctx)
    }

    fn init(&self, ctx: &PageContext<'_, S, Params>) -> Update<Model, Msg, S::GlobalMsg> {
        Update::new((self.init)(ctx))
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &PageContext<'_, S, Params>,
    ) -> Update<Model, Msg, S::GlobalMsg> {
        Update::new((self.update)(msg, model, ctx))
    }

    fn view(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> V {
        (self.view)(model, ctx)
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn> fmt::Debug
    for Sandbox<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, ViewFn>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sandbox").finish_non_exhaustive()
    }
}
