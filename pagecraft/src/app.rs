// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;
use futures::{FutureExt, StreamExt};
use pagecraft_core::transition::{lookup, navigating_path};
use pagecraft_core::{
    Bundle, Cmd, Context, Effect, Path, PrivateContext, Status, Sub, TransitionRecord,
    TransitionTracker, UiMsg, UiMsgOf,
};
use web_time::Instant;

use crate::proxy::Event;
use crate::{AppOptions, AppProxy, Program};

/// Where the navigating path is in its transition, with the timing the app needs
/// to move it along.
#[derive(Debug)]
enum Phase {
    Idle,
    Leaving { target: Path, since: Instant },
    Entering { since: Instant },
}

#[derive(Debug)]
struct Navigation {
    /// The layout path whose content is animating.
    path: Path,
    duration: Duration,
    phase: Phase,
}

/// The type responsible for running a [`Program`].
///
/// The app owns the global model, the active page's model and a queue of pending
/// messages. Every method which changes the app handles the messages it queued before
/// returning, strictly in the order they were queued.
///
/// The app doesn't own an event loop, so the embedder drives it:
/// - [`dispatch`](Self::dispatch) messages from the rendered view,
/// - [`navigate`](Self::navigate) when the URL changes,
/// - [`advance`](Self::advance) the clock, so that transitions complete,
/// - [`publish`](Self::publish) external events to subscriptions,
/// - and [`run_until_stalled`](Self::run_until_stalled) to make progress on commands.
///
/// Then [`render`](Self::render) the result.
pub struct App<P: Program> {
    program: P,
    global: P::Global,
    route: P::Route,
    path: Path,
    /// This is only `None` while the program is updating it.
    model: Option<P::Model>,
    transitions: Vec<TransitionRecord<P::View>>,
    tracker: TransitionTracker,
    navigation: Navigation,
    queue: VecDeque<Event<P>>,
    pool: LocalPool,
    spawner: LocalSpawner,
    sender: UnboundedSender<Event<P>>,
    receiver: UnboundedReceiver<Event<P>>,
    options: AppOptions,
    now: Instant,
}

impl<P: Program> App<P> {
    /// Create an app for `program`, starting at `path`.
    pub fn new(program: P, path: impl Into<Path>) -> Self {
        Self::with_options(program, path, AppOptions::default())
    }

    /// Create an app for `program`, starting at `path`, configured with `options`.
    pub fn with_options(program: P, path: impl Into<Path>, options: AppOptions) -> Self {
        let path = path.into();
        let route = program.parse_route(&path);
        let (global, global_cmd) = program.init_global(&route);
        let (model, cmd, page_global_cmd) = program
            .init(&Context::new(&global, &route))
            .into_parts();
        let transitions = program.transitions();
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let (sender, receiver) = mpsc::unbounded();
        let now = Instant::now();

        let navigating = navigating_path(&transitions, &path, &path);
        let duration = lookup(&transitions, &navigating).duration();
        let mut tracker = TransitionTracker::new();
        let phase = if duration.is_zero() {
            tracker.settle(&navigating);
            Phase::Idle
        } else {
            tracker.enter(&navigating);
            Phase::Entering { since: now }
        };
        tracing::debug!(%path, "Starting app");

        let mut app = Self {
            program,
            global,
            route,
            path,
            model: Some(model),
            transitions,
            tracker,
            navigation: Navigation {
                path: navigating,
                duration,
                phase,
            },
            queue: VecDeque::new(),
            pool,
            spawner,
            sender,
            receiver,
            options,
            now,
        };
        app.run_cmd(global_cmd, UiMsg::Global);
        app.run_cmd(cmd, UiMsg::Page);
        app.run_cmd(page_global_cmd, UiMsg::Global);
        app.flush();
        app
    }

    /// Handle `msg`, and any messages it causes to be sent.
    pub fn dispatch(&mut self, msg: UiMsgOf<P>) {
        self.queue.push_back(Event::Msg(msg));
        self.flush();
    }

    /// Navigate to `path`.
    ///
    /// If the navigating layout has a transition, its current content is hidden
    /// first, and the new page is only created once the transition's duration has
    /// passed according to [`advance`](Self::advance). Otherwise, the page is
    /// replaced immediately.
    ///
    /// Navigating while a previous navigation is still pending replaces it.
    pub fn navigate(&mut self, path: impl Into<Path>) {
        self.queue.push_back(Event::Navigate(path.into()));
        self.flush();
    }

    /// Move the app's clock to `now`, completing any transition whose time is up.
    ///
    /// The app never reads the system clock after it was created, so tests can
    /// drive transitions deterministically.
    pub fn advance(&mut self, now: Instant) {
        let now = self.now.max(now);
        self.now = now;
        let elapsed = |since: Instant| now.saturating_duration_since(since);
        loop {
            match &self.navigation.phase {
                Phase::Leaving { since, .. } if elapsed(*since) >= self.navigation.duration => {
                    let since = *since + self.navigation.duration;
                    let Phase::Leaving { target, .. } =
                        std::mem::replace(&mut self.navigation.phase, Phase::Entering { since })
                    else {
                        unreachable!("We just matched this phase");
                    };
                    self.load(target);
                    self.tracker.enter(&self.navigation.path);
                }
                Phase::Entering { since } if elapsed(*since) >= self.navigation.duration => {
                    self.navigation.phase = Phase::Idle;
                    self.tracker.settle(&self.navigation.path);
                }
                _ => break,
            }
        }
        self.flush();
    }

    /// Deliver `event`, published on `topic`, to the subscriptions of the active page
    /// and of the global model.
    ///
    /// Returns the number of messages this caused.
    pub fn publish<E: 'static>(&mut self, topic: &str, event: &E) -> usize {
        let page = self.subscriptions().deliver(topic, event);
        let global = self
            .program
            .global_subscriptions(&self.global)
            .deliver(topic, event);
        let count = page.len() + global.len();
        tracing::trace!(topic, count, "Published event");
        self.queue.extend(
            global
                .into_iter()
                .map(|msg| Event::Msg(UiMsg::Global(msg))),
        );
        self.queue
            .extend(page.into_iter().map(|msg| Event::Msg(UiMsg::Page(msg))));
        self.flush();
        count
    }

    /// Poll every in-flight command until none of them can make progress, then
    /// handle the messages they produced, and those sent through [proxies](Self::proxy).
    ///
    /// This is a single round: commands started while handling those messages are
    /// only polled by the next call.
    ///
    /// Returns the number of messages received.
    pub fn run_until_stalled(&mut self) -> usize {
        self.pool.run_until_stalled();
        let mut received = 0;
        // The app owns a sender, so the channel is never closed while it is alive.
        while let Some(Some(event)) = self.receiver.next().now_or_never() {
            self.queue.push_back(event);
            received += 1;
        }
        self.flush();
        received
    }

    /// Render the active page.
    pub fn render(&self) -> Bundle<P::View, P::Msg> {
        let private = PrivateContext::new(
            &self.navigation.path,
            &self.transitions,
            self.tracker.visibility(&self.navigation.path),
        );
        self.program.bundle(
            self.model(),
            &private,
            &Context::new(&self.global, &self.route),
        )
    }

    /// The external events the active page is listening to.
    pub fn subscriptions(&self) -> Sub<P::Msg> {
        self.render().subscriptions
    }

    /// A handle to send this app messages from outside.
    pub fn proxy(&self) -> AppProxy<P> {
        AppProxy::new(self.sender.clone())
    }

    /// The program this app runs.
    pub fn program(&self) -> &P {
        &self.program
    }

    /// The global model.
    pub fn global(&self) -> &P::Global {
        &self.global
    }

    /// The route of the active page.
    pub fn route(&self) -> &P::Route {
        &self.route
    }

    /// The path of the active page.
    ///
    /// While leaving, this is still the path being navigated away from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The model of the active page.
    pub fn model(&self) -> &P::Model {
        self.model
            .as_ref()
            .expect("the model is only taken while the program updates it")
    }

    /// The app's clock, as last set by [`advance`](Self::advance).
    pub fn now(&self) -> Instant {
        self.now
    }

    /// The layout path whose content animates for the current navigation.
    pub fn navigating_path(&self) -> &Path {
        &self.navigation.path
    }

    /// The transition status of the navigating path.
    pub fn status(&self) -> Status {
        self.tracker.status(&self.navigation.path)
    }

    /// Whether a navigation is waiting for its transition to finish.
    pub fn is_navigating(&self) -> bool {
        !matches!(self.navigation.phase, Phase::Idle)
    }

    /// The number of messages which are waiting to be handled.
    pub fn pending_messages(&self) -> usize {
        self.queue.len()
    }

    /// Handle queued events in order, until the queue is empty or the budget is spent.
    fn flush(&mut self) {
        let budget = self.options.max_messages_per_flush();
        let mut handled = 0;
        while !self.queue.is_empty() {
            if handled == budget {
                tracing::warn!(
                    budget,
                    remaining = self.queue.len(),
                    "Too many messages in one flush, deferring the rest"
                );
                break;
            }
            let Some(event) = self.queue.pop_front() else {
                break;
            };
            handled += 1;
            match event {
                Event::Msg(msg) => self.handle(msg),
                Event::Navigate(path) => self.start_navigation(path),
            }
        }
    }

    fn handle(&mut self, msg: UiMsgOf<P>) {
        match msg {
            UiMsg::Global(msg) => {
                tracing::trace!("Handling global message");
                let cmd = self
                    .program
                    .update_global(msg, &mut self.global, &self.route);
                self.run_cmd(cmd, UiMsg::Global);
            }
            UiMsg::Page(msg) => {
                tracing::trace!("Handling page message");
                let model = self
                    .model
                    .take()
                    .expect("the model is only taken while the program updates it");
                let (model, cmd, global_cmd) = self
                    .program
                    .update(msg, model, &Context::new(&self.global, &self.route))
                    .into_parts();
                self.model = Some(model);
                self.run_cmd(cmd, UiMsg::Page);
                self.run_cmd(global_cmd, UiMsg::Global);
            }
        }
    }

    fn start_navigation(&mut self, target: Path) {
        if !matches!(self.navigation.phase, Phase::Idle) {
            tracing::debug!(navigating = %self.navigation.path, "Replacing pending navigation");
            self.tracker.settle(&self.navigation.path);
        }
        let navigating = navigating_path(&self.transitions, &self.path, &target);
        let duration = lookup(&self.transitions, &navigating).duration();
        tracing::debug!(from = %self.path, to = %target, %navigating, ?duration, "Navigating");
        self.navigation.path = navigating;
        self.navigation.duration = duration;
        if duration.is_zero() {
            self.navigation.phase = Phase::Idle;
            self.load(target);
            self.tracker.settle(&self.navigation.path);
        } else {
            self.tracker.leave(&self.navigation.path);
            self.navigation.phase = Phase::Leaving {
                target,
                since: self.now,
            };
        }
    }

    /// Replace the active page with the page for `path`.
    fn load(&mut self, path: Path) {
        self.route = self.program.parse_route(&path);
        self.path = path;
        let (model, cmd, global_cmd) = self
            .program
            .init(&Context::new(&self.global, &self.route))
            .into_parts();
        // Commands of the previous page may still resolve; the program drops their results.
        self.model = Some(model);
        self.run_cmd(cmd, UiMsg::Page);
        self.run_cmd(global_cmd, UiMsg::Global);
    }

    fn run_cmd<M: 'static>(&mut self, cmd: Cmd<M>, wrap: fn(M) -> UiMsgOf<P>) {
        for effect in cmd.into_effects() {
            match effect {
                Effect::Send(msg) => self.queue.push_back(Event::Msg(wrap(msg))),
                Effect::Navigate(path) => self.queue.push_back(Event::Navigate(path)),
                Effect::Perform(future) => {
                    let sender = self.sender.clone();
                    let task = async move {
                        let msg = wrap(future.await);
                        // This only fails once the app has been dropped.
                        let _ = sender.unbounded_send(Event::Msg(msg));
                    };
                    if let Err(err) = self.spawner.spawn_local(task) {
                        tracing::error!(%err, "Failed to spawn command, dropping it");
                    }
                }
            }
        }
    }
}

impl<P: Program> Debug for App<P>
where
    P::Global: Debug,
    P::Route: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("global", &self.global)
            .field("route", &self.route)
            .field("path", &self.path)
            .field("navigation", &self.navigation)
            .field("queue", &self.queue.len())
            .field("options", &self.options)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
