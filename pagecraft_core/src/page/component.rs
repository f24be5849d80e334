// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::{Page, PageContext, Spa, Sub, Update};

/// A page with local and global effects, see [`component`].
pub struct Component<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> {
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    subscriptions: SubsFn,
    view: ViewFn,
    phantom: PhantomData<fn() -> (S, Params, Model, Msg, V)>,
}

/// The most capable page: like an [`element`](crate::element), but `init` and
/// `update` also return commands for the global model.
///
/// This is the only way for a page to change the global model. A component
/// returns an [`Update`] whose `global` channel is inspected independently of
/// its local `cmd`; use [`send`](crate::send) to schedule a global message directly:
///
/// ```ignore
/// |msg, model, _| match msg {
///     ProfileMsg::SignOut => Update::new(model).with_global(send(SessionMsg::SignOut)),
/// }
/// ```
pub fn component<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>(
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    subscriptions: SubsFn,
    view: ViewFn,
) -> Component<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> Update<Model, Msg, S::GlobalMsg>,
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> Update<Model, Msg, S::GlobalMsg>,
    SubsFn: Fn(&Model, &PageContext<'_, S, Params>) -> Sub<Msg>,
    ViewFn: Fn(&Model, &PageContext<'_, S, Params>) -> V,
{
    Component {
        title,
        init,
        update,
        subscriptions,
        view,
        phantom: PhantomData,
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> Page<S>
    for Component<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> Update<Model, Msg, S::GlobalMsg>,
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> Update<Model, Msg, S::GlobalMsg>,
    SubsFn: Fn(&Model, &PageContext<'_, S, Params>) -> Sub<Msg>,
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
        (self.init)(ctx)
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &PageContext<'_, S, Params>,
    ) -> Update<Model, Msg, S::GlobalMsg> {
        (self.update)(msg, model, ctx)
    }

    fn view(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> V {
        (self.view)(model, ctx)
    }

    fn subscriptions(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> Sub<Msg> {
        (self.subscriptions)(model, ctx)
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> fmt::Debug
    for Component<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").finish_non_exhaustive()
    }
}
