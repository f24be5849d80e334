// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Each test file only uses some of these helpers")]

use core::convert::Infallible;
use core::time::Duration;

use pagecraft_core::*;

/// A tiny view tree, standing in for a real rendering library.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<Msg> {
    Text(String),
    Button(String, Msg),
    Column(Vec<Self>),
    /// A node wrapped by a transition or by layout chrome.
    Styled(&'static str, Box<Self>),
}

impl<Msg> Node<Msg> {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub(crate) fn button(label: impl Into<String>, msg: Msg) -> Self {
        Self::Button(label.into(), msg)
    }

    pub(crate) fn styled(style: &'static str, child: Self) -> Self {
        Self::Styled(style, Box::new(child))
    }

    /// The message the button labelled `label` would produce, if there is one.
    pub(crate) fn click(&self, label: &str) -> Option<&Msg> {
        match self {
            Self::Text(_) => None,
            Self::Button(text, msg) => (text == label).then_some(msg),
            Self::Column(children) => children.iter().find_map(|child| child.click(label)),
            Self::Styled(_, child) => child.click(label),
        }
    }

    /// All the text in the tree, including button labels, separated by spaces.
    pub(crate) fn content(&self) -> String {
        match self {
            Self::Text(text) | Self::Button(text, _) => text.clone(),
            Self::Column(children) => children
                .iter()
                .map(Self::content)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Styled(_, child) => child.content(),
        }
    }

    /// The styles wrapping this node, outermost first.
    pub(crate) fn styles(&self) -> Vec<&'static str> {
        let mut styles = Vec::new();
        let mut node = self;
        while let Self::Styled(style, child) = node {
            styles.push(*style);
            node = child;
        }
        styles
    }
}

impl<From, To> MapMessage<From, To> for Node<From> {
    type Output = Node<To>;

    fn map_message(self, f: impl Fn(From) -> To + Clone + 'static) -> Node<To> {
        match self {
            Self::Text(text) => Node::Text(text),
            Self::Button(label, msg) => Node::Button(label, f(msg)),
            Self::Column(children) => Node::Column(
                children
                    .into_iter()
                    .map(|child| child.map_message(f.clone()))
                    .collect(),
            ),
            Self::Styled(style, child) => Node::Styled(style, Box::new((*child).map_message(f))),
        }
    }
}

pub(crate) struct TestApp;

impl Spa for TestApp {
    type Global = Session;
    type GlobalMsg = SessionMsg;
    type Route = Route;
    type Msg = Msg;
    type View = Node<UiMsg<SessionMsg, Msg>>;
}

pub(crate) type View = Node<UiMsg<SessionMsg, Msg>>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Session {
    pub(crate) user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionMsg {
    SignIn(String),
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Counter,
    Clock,
    Profile(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Model {
    Home(PageModel<(), ()>),
    Counter(PageModel<(), i32>),
    Clock(PageModel<(), u32>),
    Profile(PageModel<String, Profile>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Msg {
    Home(Infallible),
    Counter(CounterMsg),
    Clock(ClockMsg),
    Profile(ProfileMsg),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CounterMsg {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClockMsg {
    Tick,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Profile {
    pub(crate) saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProfileMsg {
    Save,
    Saved,
    SignOut,
}

pub(crate) fn home_page()
-> impl Page<TestApp, Params = (), Model = (), Msg = Infallible, View = Node<Infallible>> {
    static_page(
        |_: &PageContext<'_, TestApp, ()>| "Home".to_string(),
        |ctx: &PageContext<'_, TestApp, ()>| match &ctx.global.user {
            Some(user) => Node::text(format!("Welcome back, {user}")),
            None => Node::text("Welcome"),
        },
    )
}

pub(crate) fn counter_page()
-> impl Page<TestApp, Params = (), Model = i32, Msg = CounterMsg, View = Node<CounterMsg>> {
    sandbox(
        |count: &i32, _: &PageContext<'_, TestApp, ()>| format!("Count: {count}"),
        |_: &PageContext<'_, TestApp, ()>| 0,
        |msg: CounterMsg, count: i32, _: &PageContext<'_, TestApp, ()>| match msg {
            CounterMsg::Increment => count + 1,
            CounterMsg::Decrement => count - 1,
        },
        |count: &i32, _: &PageContext<'_, TestApp, ()>| {
            Node::Column(vec![
                Node::text(count.to_string()),
                Node::button("+", CounterMsg::Increment),
                Node::button("-", CounterMsg::Decrement),
            ])
        },
    )
}

/// A clock which asks for a tick after every tick, and listens to "tick" events.
pub(crate) fn clock_page()
-> impl Page<TestApp, Params = (), Model = u32, Msg = ClockMsg, View = Node<ClockMsg>> {
    element(
        |ticks: &u32, _: &PageContext<'_, TestApp, ()>| format!("{ticks} ticks"),
        |_: &PageContext<'_, TestApp, ()>| (0, Cmd::none()),
        |msg: ClockMsg, ticks: u32, _: &PageContext<'_, TestApp, ()>| match msg {
            ClockMsg::Tick => (ticks + 1, Cmd::perform(async { ClockMsg::Tick })),
            ClockMsg::Reset => (0, Cmd::none()),
        },
        |_: &u32, _: &PageContext<'_, TestApp, ()>| {
            Sub::on("tick", |_: &Duration| ClockMsg::Tick)
        },
        |ticks: &u32, _: &PageContext<'_, TestApp, ()>| {
            Node::Column(vec![
                Node::text(ticks.to_string()),
                Node::button("reset", ClockMsg::Reset),
            ])
        },
    )
}

/// A profile which saves asynchronously, and can sign the user out.
pub(crate) fn profile_page() -> impl Page<
    TestApp,
    Params = String,
    Model = Profile,
    Msg = ProfileMsg,
    View = Node<ProfileMsg>,
> {
    component(
        |_: &Profile, ctx: &PageContext<'_, TestApp, String>| {
            format!("Profile of {}", ctx.params)
        },
        |_: &PageContext<'_, TestApp, String>| Update::new(Profile { saved: false }),
        |msg: ProfileMsg, profile: Profile, _: &PageContext<'_, TestApp, String>| match msg {
            ProfileMsg::Save => {
                Update::new(profile).with_cmd(Cmd::perform(async { ProfileMsg::Saved }))
            }
            ProfileMsg::Saved => Update::new(Profile { saved: true }),
            ProfileMsg::SignOut => Update::new(profile).with_global(send(SessionMsg::SignOut)),
        },
        |_: &Profile, _: &PageContext<'_, TestApp, String>| Sub::none(),
        |profile: &Profile, ctx: &PageContext<'_, TestApp, String>| {
            Node::Column(vec![
                Node::text(ctx.params.clone()),
                Node::text(if profile.saved { "saved" } else { "unsaved" }),
                Node::button("save", ProfileMsg::Save),
                Node::button("sign out", ProfileMsg::SignOut),
            ])
        },
    )
}

pub(crate) fn home() -> impl Recipe<
    TestApp,
    Params = (),
    Model = PageModel<(), ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(home_page(), Model::Home, Msg::Home)
}

pub(crate) fn counter() -> impl Recipe<
    TestApp,
    Params = (),
    Model = PageModel<(), i32>,
    Msg = CounterMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(counter_page(), Model::Counter, Msg::Counter)
}

pub(crate) fn clock() -> impl Recipe<
    TestApp,
    Params = (),
    Model = PageModel<(), u32>,
    Msg = ClockMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(clock_page(), Model::Clock, Msg::Clock)
}

pub(crate) fn profile() -> impl Recipe<
    TestApp,
    Params = String,
    Model = PageModel<String, Profile>,
    Msg = ProfileMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(profile_page(), Model::Profile, Msg::Profile)
}

/// The application's dispatch: one match over the active page and the message.
pub(crate) fn update(
    msg: Msg,
    model: Model,
    ctx: &Context<'_, TestApp>,
) -> Update<Model, Msg, SessionMsg> {
    match (msg, model) {
        (Msg::Counter(msg), Model::Counter(model)) => counter().update(msg, model, ctx),
        (Msg::Clock(msg), Model::Clock(model)) => clock().update(msg, model, ctx),
        (Msg::Profile(msg), Model::Profile(model)) => profile().update(msg, model, ctx),
        (_, model) => keep(model),
    }
}

/// The application's router.
pub(crate) fn init(ctx: &Context<'_, TestApp>) -> Update<Model, Msg, SessionMsg> {
    match ctx.route {
        Route::Home => home().init((), ctx),
        Route::Counter => counter().init((), ctx),
        Route::Clock => clock().init((), ctx),
        Route::Profile(name) => profile().init(name.clone(), ctx),
    }
}

pub(crate) fn bundle(
    model: &Model,
    private: &PrivateContext<'_, TestApp, Msg>,
    ctx: &Context<'_, TestApp>,
) -> Bundle<View, Msg> {
    match model {
        Model::Home(model) => home().bundle(model, private, ctx),
        Model::Counter(model) => counter().bundle(model, private, ctx),
        Model::Clock(model) => clock().bundle(model, private, ctx),
        Model::Profile(model) => profile().bundle(model, private, ctx),
    }
}

/// A fade which marks views with their visibility.
pub(crate) fn fade(ms: u64) -> Transition<View> {
    Transition::custom(
        Duration::from_millis(ms),
        |view| Node::styled("hidden", view),
        |view| Node::styled("shown", view),
    )
}

/// Render `model` with nothing navigating.
pub(crate) fn render(model: &Model, global: &Session, route: &Route) -> Bundle<View, Msg> {
    let path = Path::root();
    let private = PrivateContext::<TestApp, Msg>::new(&path, &[], Visibility::Visible);
    bundle(model, &private, &Context::new(global, route))
}
