// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! The read-only bundles handed to recipes and pages on every dispatch.

use alloc::borrow::ToOwned;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::transition::{TransitionRecord, Visibility};
use crate::{GlobalMsgMapper, Spa, UiMsg, UiMsgOf};

/// A URL path, as a list of segments.
///
/// Paths identify layouts and the transitions which apply to them.
/// Empty segments are dropped, so `"/docs//intro/"` and `"docs/intro"` are the same path.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<String>);

impl Path {
    /// The root path, `/`.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from its segments.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(
            segments
                .into_iter()
                .map(Into::into)
                .filter(|segment| !segment.is_empty())
                .collect(),
        )
    }

    /// Split a URL path such as `/docs/intro` into its segments.
    ///
    /// Any query string or fragment is ignored.
    pub fn parse(url_path: &str) -> Self {
        let url_path = url_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        Self::new(url_path.split('/'))
    }

    /// The segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `prefix` is a (not necessarily strict) prefix of this path.
    ///
    /// The root path is a prefix of every path.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// A new path with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        if !segment.is_empty() {
            segments.push(segment.to_owned());
        }
        Self(segments)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl From<&str> for Path {
    fn from(url_path: &str) -> Self {
        Self::parse(url_path)
    }
}

impl From<String> for Path {
    fn from(url_path: String) -> Self {
        Self::parse(&url_path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

/// The dispatch context: what every recipe can see of the wider application.
///
/// This is rebuilt by the runtime for every `init`, `update` and `bundle` call
/// and is never stored. Pages can read the global model through it, but can only
/// change the global model by returning global commands.
pub struct Context<'a, S: Spa> {
    /// The global model.
    pub global: &'a S::Global,
    /// The current route.
    pub route: &'a S::Route,
}

impl<'a, S: Spa> Context<'a, S> {
    /// Create a context borrowing the runtime's state.
    pub fn new(global: &'a S::Global, route: &'a S::Route) -> Self {
        Self { global, route }
    }

    /// The context seen by a page which was initialised with `params`.
    pub fn with_params<'p, Params>(&self, params: &'p Params) -> PageContext<'p, S, Params>
    where
        'a: 'p,
    {
        PageContext {
            global: self.global,
            route: self.route,
            params,
        }
    }
}

impl<S: Spa> Clone for Context<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Spa> Copy for Context<'_, S> {}

impl<S: Spa> Debug for Context<'_, S>
where
    S::Global: Debug,
    S::Route: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("global", self.global)
            .field("route", self.route)
            .finish()
    }
}

/// The dispatch context as seen by a single page: [`Context`] plus the page's
/// own route parameters.
pub struct PageContext<'a, S: Spa, Params> {
    /// The global model.
    pub global: &'a S::Global,
    /// The current route.
    pub route: &'a S::Route,
    /// The parameters this page was initialised with.
    pub params: &'a Params,
}

impl<S: Spa, Params> Clone for PageContext<'_, S, Params> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Spa, Params> Copy for PageContext<'_, S, Params> {}

impl<S: Spa, Params: Debug> Debug for PageContext<'_, S, Params>
where
    S::Global: Debug,
    S::Route: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContext")
            .field("global", self.global)
            .field("route", self.route)
            .field("params", self.params)
            .finish()
    }
}

/// Framework-internal state for rendering, threaded through
/// [`Recipe::bundle`](crate::Recipe::bundle).
///
/// This carries the reverse injections from a recipe's message space up to the
/// application's [`UiMsg`], alongside the state of any navigation transition.
/// It is created by the runtime, narrowed by each level of composition with
/// [`for_page`](Self::for_page), and consumed by [`Layout`](crate::Layout)s.
pub struct PrivateContext<'a, S: Spa, Msg> {
    from_page_msg: Rc<dyn Fn(Msg) -> UiMsgOf<S>>,
    from_global_msg: GlobalMsgMapper<S>,
    path: &'a Path,
    transitions: &'a [TransitionRecord<S::View>],
    visibility: Visibility,
}

/// Methods used by implementations of the runtime, not directly by recipes.
impl<'a, S: Spa> PrivateContext<'a, S, S::Msg> {
    /// Create the root private context.
    ///
    /// `path` is the layout path which is currently navigating, and `visibility`
    /// is the transition visibility of that path.
    pub fn new(
        path: &'a Path,
        transitions: &'a [TransitionRecord<S::View>],
        visibility: Visibility,
    ) -> Self {
        Self {
            from_page_msg: Rc::new(UiMsg::<S::GlobalMsg, S::Msg>::Page),
            from_global_msg: Rc::new(UiMsg::<S::GlobalMsg, S::Msg>::Global),
            path,
            transitions,
            visibility,
        }
    }
}

impl<'a, S: Spa, Msg: 'static> PrivateContext<'a, S, Msg> {
    /// The private context for a child whose messages are injected with `to_msg`.
    pub fn for_page<Inner: 'static>(
        &self,
        to_msg: impl Fn(Inner) -> Msg + 'static,
    ) -> PrivateContext<'a, S, Inner> {
        let from_page_msg = self.from_page_msg.clone();
        PrivateContext {
            from_page_msg: Rc::new(move |msg| from_page_msg(to_msg(msg))),
            from_global_msg: self.from_global_msg.clone(),
            path: self.path,
            transitions: self.transitions,
            visibility: self.visibility,
        }
    }

    /// Lift a message of this level into the application's UI message.
    pub fn page_msg(&self, msg: Msg) -> UiMsgOf<S> {
        (self.from_page_msg)(msg)
    }

    /// A shareable function lifting messages of this level into the UI message.
    pub fn page_msg_mapper(&self) -> Rc<dyn Fn(Msg) -> UiMsgOf<S>> {
        self.from_page_msg.clone()
    }

    /// A shareable function lifting global messages into the UI message.
    pub fn global_msg_mapper(&self) -> GlobalMsgMapper<S> {
        self.from_global_msg.clone()
    }

    /// The layout path which is currently navigating.
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// The transitions configured for the application.
    pub fn transitions(&self) -> &'a [TransitionRecord<S::View>] {
        self.transitions
    }

    /// The visibility of the navigating path.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl<S: Spa, Msg> Debug for PrivateContext<'_, S, Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateContext")
            .field("path", self.path)
            .field("transitions", &self.transitions.len())
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
