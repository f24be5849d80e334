// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! The unit of composition.

use alloc::string::String;
use core::fmt::{self, Debug};

use crate::{Context, PrivateContext, Spa, Sub, Update};

/// Everything the runtime needs to render one model.
pub struct Bundle<View, Msg> {
    /// The document title.
    pub title: String,
    /// The view tree, already expressed in the application's UI message type.
    pub view: View,
    /// The external events the model is listening to.
    pub subscriptions: Sub<Msg>,
}

impl<View, Msg> Bundle<View, Msg> {
    /// Transform the view, keeping the title and subscriptions.
    pub fn map_view<To>(self, f: impl FnOnce(View) -> To) -> Bundle<To, Msg> {
        Bundle {
            title: self.title,
            view: f(self.view),
            subscriptions: self.subscriptions,
        }
    }
}

impl<View: Debug, Msg> Debug for Bundle<View, Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("title", &self.title)
            .field("view", &self.view)
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

/// The [`Update`] type produced by the recipe `R` of the application `S`.
pub type RecipeUpdate<S, R> = Update<
    <R as Recipe<S>>::ParentModel,
    <R as Recipe<S>>::ParentMsg,
    <S as Spa>::GlobalMsg,
>;

/// A page or layout, already injected into its parent's model and message space.
///
/// A recipe owns the injection from its own `Model`/`Msg` into `ParentModel`/`ParentMsg`:
/// the outputs of [`init`](Self::init) and [`update`](Self::update) are always in the
/// parent's space, and the view from [`bundle`](Self::bundle) is always in the
/// application's [`UiMsg`](crate::UiMsg). Callers therefore never handle a page's
/// private types, except to pass back the model and message the recipe produced.
///
/// Recipes nest. A page built with one of the [builder variants](crate::page) becomes
/// a recipe through [`recipe`](crate::recipe); a [`layout`](crate::layout) wraps a
/// recipe with shared chrome and is itself a recipe; and an application's hand-written
/// union of pages can implement this trait to be wrapped by a layout in turn.
pub trait Recipe<S: Spa> {
    /// The parameters this recipe is initialised with, produced by the router.
    type Params;
    /// The recipe's own model, as stored inside `ParentModel`.
    type Model;
    /// The recipe's own message, as stored inside `ParentMsg`.
    type Msg;
    /// The composite model this recipe is injected into.
    type ParentModel;
    /// The composite message this recipe is injected into.
    type ParentMsg;

    /// Create the initial model for `params`.
    fn init(
        &self,
        params: Self::Params,
        ctx: &Context<'_, S>,
    ) -> Update<Self::ParentModel, Self::ParentMsg, S::GlobalMsg>;

    /// Handle `msg`, which was produced by this recipe, for `model`, which was also
    /// produced by this recipe.
    fn update(
        &self,
        msg: Self::Msg,
        model: Self::Model,
        ctx: &Context<'_, S>,
    ) -> Update<Self::ParentModel, Self::ParentMsg, S::GlobalMsg>;

    /// Produce the title, view and subscriptions of `model`.
    fn bundle(
        &self,
        model: &Self::Model,
        private: &PrivateContext<'_, S, Self::ParentMsg>,
        ctx: &Context<'_, S>,
    ) -> Bundle<S::View, Self::ParentMsg>;
}
