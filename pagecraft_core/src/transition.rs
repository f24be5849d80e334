// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! Animated transitions between pages.
//!
//! A [`Transition`] describes how a view looks while it is hidden and while it is
//! shown; the runtime decides which of the two applies at any moment, by tracking
//! a [`Status`] for the layout path which is navigating. Layouts look up their
//! transition by path in a list of [`TransitionRecord`]s, and fall back to
//! [`Transition::OptOut`] when there is none.

use alloc::rc::Rc;
use core::fmt::{self, Debug};
use core::time::Duration;

use hashbrown::HashMap;

use crate::Path;

/// Whether a transitioning view is currently hidden or shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The view is hidden, or fading out.
    Invisible,
    /// The view is shown, or fading in.
    Visible,
}

/// Wraps a view to style it for one [`Visibility`].
pub type ViewWrapper<View> = Rc<dyn Fn(View) -> View>;

/// How the content of a layout animates while navigating.
pub enum Transition<View> {
    /// No animation at all: the page is swapped immediately on navigation.
    OptOut,
    /// Animate between an invisible and a visible styling.
    Custom {
        /// How long each half (leaving, then entering) of the transition takes.
        duration: Duration,
        /// Styles a view which is hidden.
        invisible: ViewWrapper<View>,
        /// Styles a view which is shown.
        visible: ViewWrapper<View>,
    },
}

impl<View: 'static> Transition<View> {
    /// A transition which does nothing, but which still takes part in navigation
    /// (unlike [`OptOut`](Self::OptOut)), with a duration of zero.
    pub fn none() -> Self {
        Self::custom(Duration::ZERO, |view| view, |view| view)
    }

    /// A transition which styles views with `invisible` and `visible`, and where each
    /// half of the animation lasts for `duration`.
    pub fn custom(
        duration: Duration,
        invisible: impl Fn(View) -> View + 'static,
        visible: impl Fn(View) -> View + 'static,
    ) -> Self {
        Self::Custom {
            duration,
            invisible: Rc::new(invisible),
            visible: Rc::new(visible),
        }
    }
}

impl<View> Transition<View> {
    /// The opt-out transition.
    pub fn opt_out() -> Self {
        Self::OptOut
    }

    /// Whether this is [`OptOut`](Self::OptOut).
    pub fn is_opt_out(&self) -> bool {
        matches!(self, Self::OptOut)
    }

    /// How long each half of this transition takes.
    pub fn duration(&self) -> Duration {
        match self {
            Self::OptOut => Duration::ZERO,
            Self::Custom { duration, .. } => *duration,
        }
    }

    /// Style `view` for `visibility`.
    ///
    /// This always produces a view; [`OptOut`](Self::OptOut) returns it unchanged.
    pub fn apply(&self, visibility: Visibility, view: View) -> View {
        match (self, visibility) {
            (Self::OptOut, _) => view,
            (Self::Custom { invisible, .. }, Visibility::Invisible) => invisible(view),
            (Self::Custom { visible, .. }, Visibility::Visible) => visible(view),
        }
    }
}

impl<View> Default for Transition<View> {
    fn default() -> Self {
        Self::OptOut
    }
}

impl<View> Clone for Transition<View> {
    fn clone(&self) -> Self {
        match self {
            Self::OptOut => Self::OptOut,
            Self::Custom {
                duration,
                invisible,
                visible,
            } => Self::Custom {
                duration: *duration,
                invisible: invisible.clone(),
                visible: visible.clone(),
            },
        }
    }
}

impl<View> Debug for Transition<View> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptOut => f.write_str("OptOut"),
            Self::Custom { duration, .. } => f
                .debug_struct("Custom")
                .field("duration", duration)
                .finish_non_exhaustive(),
        }
    }
}

/// The transition which applies to the content of the layout at `path`.
pub struct TransitionRecord<View> {
    /// The path of the layout.
    pub path: Path,
    /// The transition of its content.
    pub transition: Transition<View>,
}

impl<View> TransitionRecord<View> {
    /// Apply `transition` to the content of the layout at `path`.
    pub fn new(path: impl Into<Path>, transition: Transition<View>) -> Self {
        Self {
            path: path.into(),
            transition,
        }
    }
}

impl<View> Clone for TransitionRecord<View> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            transition: self.transition.clone(),
        }
    }
}

impl<View> Debug for TransitionRecord<View> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRecord")
            .field("path", &self.path)
            .field("transition", &self.transition)
            .finish()
    }
}

/// Find the transition for `path`, or [`Transition::OptOut`] if there is none.
///
/// Records are searched in order, so the first record for a path wins.
pub fn lookup<View>(records: &[TransitionRecord<View>], path: &Path) -> Transition<View> {
    records
        .iter()
        .find(|record| record.path == *path)
        .map(|record| record.transition.clone())
        .unwrap_or_default()
}

/// Choose the layout path whose content animates when navigating from `from` to `to`.
///
/// This is the deepest path with a transition record which contains both `from` and
/// `to`; the layouts above it stay in place, and everything inside it is swapped.
/// The root path is used if no record matches.
pub fn navigating_path<View>(records: &[TransitionRecord<View>], from: &Path, to: &Path) -> Path {
    records
        .iter()
        .map(|record| &record.path)
        .filter(|path| from.starts_with(path) && to.starts_with(path))
        .max_by_key(|path| path.segments().len())
        .cloned()
        .unwrap_or_default()
}

/// Where a navigating path is in its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The content has not been shown yet.
    #[default]
    NotStarted,
    /// The content is animating in.
    Entering,
    /// The content is shown, and not animating.
    Visible,
    /// The old content is animating out, before being replaced.
    Leaving,
}

impl Status {
    /// The visibility a view should be styled with in this status.
    pub fn visibility(self) -> Visibility {
        match self {
            Self::NotStarted | Self::Leaving => Visibility::Invisible,
            Self::Entering | Self::Visible => Visibility::Visible,
        }
    }

    /// Whether an animation is in progress.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Entering | Self::Leaving)
    }
}

/// Bookkeeping of the transition status of each navigating path.
///
/// This is owned by the runtime. Paths which were never tracked are
/// [`Status::NotStarted`].
#[derive(Debug, Default)]
pub struct TransitionTracker {
    statuses: HashMap<Path, Status>,
}

impl TransitionTracker {
    /// An empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The status of `path`.
    pub fn status(&self, path: &Path) -> Status {
        self.statuses.get(path).copied().unwrap_or_default()
    }

    /// The visibility of `path`.
    pub fn visibility(&self, path: &Path) -> Visibility {
        self.status(path).visibility()
    }

    /// Start hiding the content of `path`.
    pub fn leave(&mut self, path: &Path) {
        self.set(path, Status::Leaving);
    }

    /// Start showing the (new) content of `path`.
    pub fn enter(&mut self, path: &Path) {
        self.set(path, Status::Entering);
    }

    /// Mark `path` as shown, with no animation in progress.
    pub fn settle(&mut self, path: &Path) {
        self.set(path, Status::Visible);
    }

    /// Whether any path is animating.
    pub fn is_animating(&self) -> bool {
        self.statuses.values().any(|status| status.is_animating())
    }

    fn set(&mut self, path: &Path, status: Status) {
        let previous = self.statuses.insert(path.clone(), status);
        tracing::debug!(%path, ?previous, ?status, "Transition status changed");
    }
}
