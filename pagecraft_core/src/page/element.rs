// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::{Cmd, Page, PageContext, Spa, Sub, Update};

/// A page with local effects, see [`element`].
pub struct Element<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> {
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    subscriptions: SubsFn,
    view: ViewFn,
    phantom: PhantomData<fn() -> (S, Params, Model, Msg, V)>,
}

/// A page which can run commands and subscribe to external events.
///
/// The results of its commands come back to the page itself. An element can't
/// change the global model; use a [`component`](crate::component) for that.
pub fn element<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>(
    title: TitleFn,
    init: InitFn,
    update: UpdateFn,
    subscriptions: SubsFn,
    view: ViewFn,
) -> Element<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> (Model, Cmd<Msg>),
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> (Model, Cmd<Msg>),
    SubsFn: Fn(&Model, &PageContext<'_, S, Params>) -> Sub<Msg>,
    ViewFn: Fn(&Model, &PageContext<'_, S, Params>) -> V,
{
    Element {
        title,
        init,
        update,
        subscriptions,
        view,
        phantom: PhantomData,
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> Page<S>
    for Element<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
where
    S: Spa,
    TitleFn: Fn(&Model, &PageContext<'_, S, Params>) -> String,
    InitFn: Fn(&PageContext<'_, S, Params>) -> (Model, Cmd<Msg>),
    UpdateFn: Fn(Msg, Model, &PageContext<'_, S, Params>) -> (Model, Cmd<Msg>),
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
        let (model, cmd) = (self.init)(ctx);
        Update::new(model).with_cmd(cmd)
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &PageContext<'_, S, Params>,
    ) -> Update<Model, Msg, S::GlobalMsg> {
        let (model, cmd) = (self.update)(msg, model, ctx);
        Update::new(model).with_cmd(cmd)
    }

    fn view(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> V {
        (self.view)(model, ctx)
    }

    fn subscriptions(&self, model: &Model, ctx: &PageContext<'_, S, Params>) -> Sub<Msg> {
        (self.subscriptions)(model, ctx)
    }
}

impl<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn> fmt::Debug
    for Element<S, Params, Model, Msg, V, TitleFn, InitFn, UpdateFn, SubsFn, ViewFn>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}
