// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{self, Debug};
use core::marker::PhantomData;

use crate::{Bundle, Context, MapMessage, Page, PrivateContext, Recipe, Spa, UiMsgOf, Update};

/// The model of a page, as stored in the application's model.
///
/// The parameters the page was initialised with are kept next to its model, so that
/// later dispatches can hand them to the page again in its [`PageContext`](crate::PageContext).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageModel<Params, Model> {
    params: Params,
    model: Model,
}

impl<Params, Model> PageModel<Params, Model> {
    /// Store `model` alongside the `params` it was created with.
    pub fn new(params: Params, model: Model) -> Self {
        Self { params, model }
    }

    /// The parameters the page was initialised with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The page's own model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Split into the parameters and the page's own model.
    pub fn into_parts(self) -> (Params, Model) {
        (self.params, self.model)
    }
}

/// A [`Page`] injected into a parent's model and message types, see [`recipe`].
pub struct PageRecipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg> {
    page: Pg,
    to_model: ToModel,
    to_msg: ToMsg,
    phantom: PhantomData<fn() -> (S, ParentModel, ParentMsg)>,
}

/// Turn `page` into a [`Recipe`], injected with `to_model` and `to_msg`.
///
/// These are usually the variant constructors of the application's model and
/// message enums:
///
/// ```ignore
/// fn counter() -> impl Recipe<MyApp, Params = (), Msg = CounterMsg, ...> {
///     recipe(counter_page(), Model::Counter, Msg::Counter)
/// }
/// ```
///
/// The page's commands and subscriptions are re-targeted with `to_msg`, and its view
/// is mapped all the way to the application's [`UiMsg`](crate::UiMsg) through the
/// [`PrivateContext`] of every enclosing recipe.
pub fn recipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>(
    page: Pg,
    to_model: ToModel,
    to_msg: ToMsg,
) -> PageRecipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>
where
    S: Spa,
    Pg: Page<S>,
    ToModel: Fn(PageModel<Pg::Params, Pg::Model>) -> ParentModel,
    ToMsg: Fn(Pg::Msg) -> ParentMsg + Clone + 'static,
{
    PageRecipe {
        page,
        to_model,
        to_msg,
        phantom: PhantomData,
    }
}

impl<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>
    PageRecipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>
{
    /// The page this recipe wraps.
    pub fn page(&self) -> &Pg {
        &self.page
    }
}

impl<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg> Recipe<S>
    for PageRecipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>
where
    S: Spa,
    Pg: Page<S>,
    Pg::Msg: 'static,
    Pg::View: MapMessage<Pg::Msg, UiMsgOf<S>, Output = S::View>,
    ToModel: Fn(PageModel<Pg::Params, Pg::Model>) -> ParentModel,
    ToMsg: Fn(Pg::Msg) -> ParentMsg + Clone + 'static,
    ParentMsg: 'static,
{
    type Params = Pg::Params;
    type Model = PageModel<Pg::Params, Pg::Model>;
    type Msg = Pg::Msg;
    type ParentModel = ParentModel;
    type ParentMsg = ParentMsg;

    fn init(
        &self,
        params: Pg::Params,
        ctx: &Context<'_, S>,
    ) -> Update<ParentModel, ParentMsg, S::GlobalMsg> {
        let update = self.page.init(&ctx.with_params(&params));
        update.inject(
            |model| (self.to_model)(PageModel::new(params, model)),
            self.to_msg.clone(),
        )
    }

    fn update(
        &self,
        msg: Pg::Msg,
        model: Self::Model,
        ctx: &Context<'_, S>,
    ) -> Update<ParentModel, ParentMsg, S::GlobalMsg> {
        let (params, model) = model.into_parts();
        let update = self.page.update(msg, model, &ctx.with_params(&params));
        update.inject(
            |model| (self.to_model)(PageModel::new(params, model)),
            self.to_msg.clone(),
        )
    }

    fn bundle(
        &self,
        model: &Self::Model,
        private: &PrivateContext<'_, S, ParentMsg>,
        ctx: &Context<'_, S>,
    ) -> Bundle<S::View, ParentMsg> {
        let ctx = ctx.with_params(&model.params);
        let to_ui = private.for_page(self.to_msg.clone()).page_msg_mapper();
        Bundle {
            title: self.page.title(&model.model, &ctx),
            view: self
                .page
                .view(&model.model, &ctx)
                .map_message(move |msg| to_ui(msg)),
            subscriptions: self
                .page
                .subscriptions(&model.model, &ctx)
                .map(self.to_msg.clone()),
        }
    }
}

impl<S, Pg: Debug, ToModel, ToMsg, ParentModel, ParentMsg> Debug
    for PageRecipe<S, Pg, ToModel, ToMsg, ParentModel, ParentMsg>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRecipe")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}
