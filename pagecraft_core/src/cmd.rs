// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! Commands and subscriptions: descriptions of effects which are executed outside the
//! composition core, and whose results re-enter the application as ordinary messages.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt::{self, Debug};
use core::future::Future;
use core::pin::Pin;

use smallvec::SmallVec;

use crate::Path;

/// A future which resolves to a message once its effect completes.
pub type PendingMsg<Msg> = Pin<Box<dyn Future<Output = Msg>>>;

/// A single effect inside a [`Cmd`].
pub enum Effect<Msg> {
    /// Deliver this message as soon as the current message has been handled.
    Send(Msg),
    /// Run this future to completion, then deliver its output.
    Perform(PendingMsg<Msg>),
    /// Navigate the application to this path.
    Navigate(Path),
}

impl<Msg: Debug> Debug for Effect<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send(msg) => f.debug_tuple("Send").field(msg).finish(),
            Self::Perform(_) => f.debug_tuple("Perform").finish_non_exhaustive(),
            Self::Navigate(path) => f.debug_tuple("Navigate").field(path).finish(),
        }
    }
}

/// An opaque, fire-and-forget description of side effects.
///
/// Commands are returned from `init` and `update` and are executed by the runtime,
/// never by the page which created them. The result of each effect is delivered
/// back to the application as a new message. There is no way to await a command
/// or to cancel it; a result arriving after its page was navigated away from is
/// dropped by [`keep`](crate::keep).
///
/// A `Cmd` is a batch: [`Cmd::none`] is the empty batch, and [`Cmd::batch`] joins
/// several commands into one.
#[must_use = "Commands do nothing unless returned to the runtime."]
pub struct Cmd<Msg> {
    effects: SmallVec<[Effect<Msg>; 1]>,
}

impl<Msg> Cmd<Msg> {
    /// The command which does nothing.
    pub fn none() -> Self {
        Self {
            effects: SmallVec::new(),
        }
    }

    /// A command which delivers `msg` right after the current message.
    ///
    /// See also [`send`].
    pub fn send(msg: Msg) -> Self {
        Self::from_effect(Effect::Send(msg))
    }

    /// A command which navigates the application to `path`.
    pub fn navigate(path: impl Into<Path>) -> Self {
        Self::from_effect(Effect::Navigate(path.into()))
    }

    /// Join several commands into one.
    pub fn batch(cmds: impl IntoIterator<Item = Self>) -> Self {
        Self {
            effects: cmds.into_iter().flat_map(|cmd| cmd.effects).collect(),
        }
    }

    fn from_effect(effect: Effect<Msg>) -> Self {
        let mut effects = SmallVec::new();
        effects.push(effect);
        Self { effects }
    }

    /// Whether this command has no effects.
    pub fn is_none(&self) -> bool {
        self.effects.is_empty()
    }

    /// The number of effects in this batch.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether this command has no effects. Same as [`is_none`](Self::is_none).
    pub fn is_empty(&self) -> bool {
        self.is_none()
    }

    /// The effects of this command, in the order they were batched.
    pub fn effects(&self) -> &[Effect<Msg>] {
        &self.effects
    }

    /// Take the effects out of this command, for execution by a runtime.
    pub fn into_effects(self) -> impl Iterator<Item = Effect<Msg>> {
        self.effects.into_iter()
    }
}

impl<Msg: 'static> Cmd<Msg> {
    /// A command which runs `future` and delivers its output as a message.
    pub fn perform(future: impl Future<Output = Msg> + 'static) -> Self {
        Self::from_effect(Effect::Perform(Box::pin(future)))
    }

    /// Re-target every message this command will produce.
    ///
    /// This is how a page's local commands are injected into its parent's message space.
    pub fn map<To: 'static>(self, f: impl Fn(Msg) -> To + Clone + 'static) -> Cmd<To> {
        let effects = self
            .effects
            .into_iter()
            .map(|effect| match effect {
                Effect::Send(msg) => Effect::Send(f(msg)),
                Effect::Perform(future) => {
                    let f = f.clone();
                    Effect::Perform(Box::pin(async move { f(future.await) }))
                }
                Effect::Navigate(path) => Effect::Navigate(path),
            })
            .collect();
        Cmd { effects }
    }
}

impl<Msg> Default for Cmd<Msg> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Msg> FromIterator<Cmd<Msg>> for Cmd<Msg> {
    fn from_iter<I: IntoIterator<Item = Cmd<Msg>>>(iter: I) -> Self {
        Self::batch(iter)
    }
}

impl<Msg> Extend<Cmd<Msg>> for Cmd<Msg> {
    fn extend<I: IntoIterator<Item = Cmd<Msg>>>(&mut self, iter: I) {
        for cmd in iter {
            self.effects.extend(cmd.effects);
        }
    }
}

impl<Msg: Debug> Debug for Cmd<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.effects.iter()).finish()
    }
}

/// Lift a message into a command.
///
/// This lets a component schedule a message (usually a global one) as though it were
/// the result of an effect:
///
/// ```
/// use pagecraft_core::{Cmd, send};
///
/// #[derive(Debug)]
/// enum SessionMsg {
///     SignOut,
/// }
///
/// let cmd: Cmd<SessionMsg> = send(SessionMsg::SignOut);
/// assert_eq!(cmd.len(), 1);
/// ```
pub fn send<Msg>(msg: Msg) -> Cmd<Msg> {
    Cmd::send(msg)
}

/// A listener for one topic of external events.
///
/// The listener is only called for events of the type it was registered for;
/// events of any other type published on the same topic are ignored.
pub struct Subscription<Msg> {
    topic: Cow<'static, str>,
    handler: Rc<dyn Fn(&dyn Any) -> Option<Msg>>,
}

impl<Msg> Subscription<Msg> {
    /// The topic this subscription listens to.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<Msg> Clone for Subscription<Msg> {
    fn clone(&self) -> Self {
        Self {
            topic: self.topic.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<Msg> Debug for Subscription<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

/// The external events a page is interested in, such as timer ticks or key presses.
///
/// Subscriptions are recomputed from the model on every render, so a page
/// subscribes by returning a `Sub` and unsubscribes by no longer returning it.
#[must_use = "Subscriptions do nothing unless returned to the runtime."]
pub struct Sub<Msg> {
    subscriptions: Vec<Subscription<Msg>>,
}

impl<Msg> Sub<Msg> {
    /// Subscribe to nothing.
    pub fn none() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Join several subscriptions into one.
    pub fn batch(subs: impl IntoIterator<Item = Self>) -> Self {
        Self {
            subscriptions: subs.into_iter().flat_map(|sub| sub.subscriptions).collect(),
        }
    }

    /// Whether this subscribes to nothing.
    pub fn is_none(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// The individual subscriptions.
    pub fn subscriptions(&self) -> &[Subscription<Msg>] {
        &self.subscriptions
    }

    /// The topics of all subscriptions, in registration order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.subscriptions.iter().map(Subscription::topic)
    }

    /// Deliver `event` published on `topic`, returning one message per interested listener.
    pub fn deliver(&self, topic: &str, event: &dyn Any) -> Vec<Msg> {
        self.subscriptions
            .iter()
            .filter(|sub| sub.topic == topic)
            .filter_map(|sub| (sub.handler)(event))
            .collect()
    }
}

impl<Msg: 'static> Sub<Msg> {
    /// Listen to events of type `E` published on `topic`.
    pub fn on<E: 'static>(
        topic: impl Into<Cow<'static, str>>,
        f: impl Fn(&E) -> Msg + 'static,
    ) -> Self {
        let subscription = Subscription {
            topic: topic.into(),
            handler: Rc::new(move |event: &dyn Any| event.downcast_ref::<E>().map(&f)),
        };
        Self {
            subscriptions: alloc::vec![subscription],
        }
    }

    /// Re-target every message these subscriptions will produce.
    pub fn map<To: 'static>(self, f: impl Fn(Msg) -> To + Clone + 'static) -> Sub<To> {
        let subscriptions = self
            .subscriptions
            .into_iter()
            .map(|Subscription { topic, handler }| {
                let f = f.clone();
                Subscription {
                    topic,
                    handler: Rc::new(move |event: &dyn Any| handler(event).map(&f)),
                }
            })
            .collect();
        Sub { subscriptions }
    }
}

impl<Msg> Default for Sub<Msg> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Msg> Clone for Sub<Msg> {
    fn clone(&self) -> Self {
        Self {
            subscriptions: self.subscriptions.clone(),
        }
    }
}

impl<Msg> Debug for Sub<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.topics()).finish()
    }
}
