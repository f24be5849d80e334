// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! The application-wide type dictionary.

use alloc::rc::Rc;

/// The types which are shared by every page of one application.
///
/// Rather than threading the global model, global message, route, page message
/// and view types through every item as separate type parameters, each of the
/// composition types is generic over a single `S: Spa`, which names them once.
/// This is usually implemented for the same (often zero-sized) type which
/// implements the runtime's `Program` trait.
///
/// ```ignore
/// struct MyApp;
///
/// impl Spa for MyApp {
///     type Global = Session;
///     type GlobalMsg = SessionMsg;
///     type Route = Route;
///     type Msg = PagesMsg;
///     type View = Node<UiMsg<SessionMsg, PagesMsg>>;
/// }
/// ```
pub trait Spa: 'static {
    /// The global model, the only state which is shared between pages.
    type Global;
    /// Messages which update the global model.
    type GlobalMsg: 'static;
    /// The typed route which the router produced from the current URL path.
    type Route;
    /// The top-level union of every page's message type.
    type Msg: 'static;
    /// The rendered view tree, whose messages are [`UiMsgOf<Self>`].
    type View: 'static;
}

/// A message emitted from the rendered view tree.
///
/// Views are always expressed in this type once they leave the page which created them,
/// so that a page's chrome can emit global messages (such as a "sign out" button in a
/// navigation bar) next to page-local ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiMsg<GlobalMsg, PageMsg> {
    /// A message for the global model.
    Global(GlobalMsg),
    /// A message for the currently active page.
    Page(PageMsg),
}

impl<GlobalMsg, PageMsg> UiMsg<GlobalMsg, PageMsg> {
    /// The page message, if this is one.
    pub fn into_page(self) -> Option<PageMsg> {
        match self {
            Self::Page(msg) => Some(msg),
            Self::Global(_) => None,
        }
    }

    /// The global message, if this is one.
    pub fn into_global(self) -> Option<GlobalMsg> {
        match self {
            Self::Global(msg) => Some(msg),
            Self::Page(_) => None,
        }
    }
}

/// The UI message type of the application `S`.
pub type UiMsgOf<S> = UiMsg<<S as Spa>::GlobalMsg, <S as Spa>::Msg>;

/// Lifts a global message into the UI message type of the application `S`.
pub type GlobalMsgMapper<S> = Rc<dyn Fn(<S as Spa>::GlobalMsg) -> UiMsgOf<S>>;
