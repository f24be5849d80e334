// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{self, Debug};

use crate::Cmd;

/// The outcome of `init` or `update`: the next model, plus the local and global
/// commands to run.
///
/// The two command channels are independent. The runtime makes no promise about the
/// relative order in which effects from `cmd` and `global` resolve.
#[must_use = "An update does nothing unless returned to the runtime."]
pub struct Update<Model, Msg, GlobalMsg> {
    /// The next model.
    pub model: Model,
    /// Commands whose results are delivered back to the same recipe.
    pub cmd: Cmd<Msg>,
    /// Commands whose results are delivered to the global model.
    pub global: Cmd<GlobalMsg>,
}

impl<Model, Msg, GlobalMsg> Update<Model, Msg, GlobalMsg> {
    /// An update to `model` with no commands.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            cmd: Cmd::none(),
            global: Cmd::none(),
        }
    }

    /// Replace the local command.
    pub fn with_cmd(self, cmd: Cmd<Msg>) -> Self {
        Self { cmd, ..self }
    }

    /// Replace the global command.
    pub fn with_global(self, global: Cmd<GlobalMsg>) -> Self {
        Self { global, ..self }
    }

    /// Whether neither channel has any effects.
    pub fn is_quiet(&self) -> bool {
        self.cmd.is_none() && self.global.is_none()
    }

    /// Split this update into `(model, cmd, global)`.
    pub fn into_parts(self) -> (Model, Cmd<Msg>, Cmd<GlobalMsg>) {
        (self.model, self.cmd, self.global)
    }

    /// Transform the model, keeping both commands.
    pub fn map_model<To>(self, f: impl FnOnce(Model) -> To) -> Update<To, Msg, GlobalMsg> {
        Update {
            model: f(self.model),
            cmd: self.cmd,
            global: self.global,
        }
    }
}

impl<Model, Msg: 'static, GlobalMsg> Update<Model, Msg, GlobalMsg> {
    /// Inject this update into a parent's model and message space.
    ///
    /// Global commands are left untouched: they already target the whole application.
    pub fn inject<ParentModel, ParentMsg: 'static>(
        self,
        to_model: impl FnOnce(Model) -> ParentModel,
        to_msg: impl Fn(Msg) -> ParentMsg + Clone + 'static,
    ) -> Update<ParentModel, ParentMsg, GlobalMsg> {
        Update {
            model: to_model(self.model),
            cmd: self.cmd.map(to_msg),
            global: self.global,
        }
    }
}

impl<Model: Debug, Msg: Debug, GlobalMsg: Debug> Debug for Update<Model, Msg, GlobalMsg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("model", &self.model)
            .field("cmd", &self.cmd)
            .field("global", &self.global)
            .finish()
    }
}

/// Keep `model` as it is, without running any commands.
///
/// This is the catch-all arm of an application's dispatch, which matches the incoming
/// message against the active page:
///
/// ```ignore
/// match (msg, model) {
///     (Msg::Counter(msg), Model::Counter(model)) => counter().update(msg, model, ctx),
///     (Msg::Clock(msg), Model::Clock(model)) => clock().update(msg, model, ctx),
///     (_, model) => keep(model),
/// }
/// ```
///
/// Messages addressed to a page which is no longer active (for instance the result
/// of a request which finished after the user navigated away) are dropped this way:
/// they are not queued, retried or reported.
pub fn keep<Model, Msg, GlobalMsg>(model: Model) -> Update<Model, Msg, GlobalMsg> {
    Update::new(model)
}
