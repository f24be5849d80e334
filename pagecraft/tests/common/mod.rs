// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Each test file only uses some of these helpers")]

use core::convert::Infallible;
use core::time::Duration;

use pagecraft::{
    App, AppOptions, Bundle, Chrome, Cmd, Context, MapMessage, PageContext, PageModel, Path,
    PrivateContext, Program, Recipe, Spa, Sub, Transition, TransitionRecord, UiMsg, Update,
    component, element, keep, layout, recipe, sandbox, send, static_page,
};

/// A tiny view tree, standing in for a real rendering library.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<Msg> {
    Text(String),
    Button(String, Msg),
    Column(Vec<Self>),
    Styled(&'static str, Box<Self>),
}

impl<Msg> Node<Msg> {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub(crate) fn styled(style: &'static str, child: Self) -> Self {
        Self::Styled(style, Box::new(child))
    }

    pub(crate) fn click(&self, label: &str) -> Option<&Msg> {
        match self {
            Self::Text(_) => None,
            Self::Button(text, msg) => (text == label).then_some(msg),
            Self::Column(children) => children.iter().find_map(|child| child.click(label)),
            Self::Styled(_, child) => child.click(label),
        }
    }

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

    /// Every style in the tree, in depth-first order.
    pub(crate) fn styles(&self) -> Vec<&'static str> {
        match self {
            Self::Text(_) | Self::Button(..) => Vec::new(),
            Self::Column(children) => children.iter().flat_map(Self::styles).collect(),
            Self::Styled(style, child) => {
                let mut styles = vec![*style];
                styles.extend(child.styles());
                styles
            }
        }
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

pub(crate) type View = Node<UiMsg<SessionMsg, Msg>>;

/// A small application, with a fade for each `(path, milliseconds)` in `fades`.
#[derive(Debug, Default)]
pub(crate) struct TestProgram {
    pub(crate) fades: Vec<(&'static str, u64)>,
    /// The user which signs in asynchronously when the app starts.
    pub(crate) remembered: Option<&'static str>,
}

impl TestProgram {
    pub(crate) fn with_fades(fades: impl Into<Vec<(&'static str, u64)>>) -> Self {
        Self {
            fades: fades.into(),
            remembered: None,
        }
    }
}

impl Spa for TestProgram {
    type Global = Session;
    type GlobalMsg = SessionMsg;
    type Route = Route;
    type Msg = Msg;
    type View = View;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Session {
    pub(crate) user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionMsg {
    SignIn(String),
    /// Sign out, and go back to the home page.
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Counter,
    Loader,
    Account,
    Docs(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Model {
    Home(PageModel<(), ()>),
    Counter(PageModel<(), i32>),
    Loader(PageModel<(), Option<u32>>),
    Account(PageModel<(), Account>),
    Docs(PageModel<String, ()>),
    NotFound(PageModel<(), ()>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Msg {
    Home(Infallible),
    Counter(CounterMsg),
    Loader(LoaderMsg),
    Account(AccountMsg),
    Docs(Infallible),
    NotFound(Infallible),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CounterMsg {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoaderMsg {
    Reload,
    Loaded(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Account {
    /// Every echo this page has received, in order.
    pub(crate) log: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AccountMsg {
    /// Log the number, then send the next lower one, stopping at multiples of ten.
    Echo(u32),
    SignIn(String),
    SignOut,
    GoToCounter,
}

type Ctx<'a, Params = ()> = PageContext<'a, TestProgram, Params>;

fn frame(chrome: Chrome<'_, TestProgram>) -> View {
    Node::styled(
        "frame",
        Node::Column(vec![
            Node::Button(
                "sign out".into(),
                chrome.global_msg(SessionMsg::SignOut),
            ),
            chrome.page,
        ]),
    )
}

fn docs_frame(chrome: Chrome<'_, TestProgram>) -> View {
    Node::styled("docs", chrome.page)
}

/// All the pages of the application, selected by route.
#[derive(Debug)]
pub(crate) struct Pages;

impl Recipe<TestProgram> for Pages {
    type Params = Route;
    type Model = Model;
    type Msg = Msg;
    type ParentModel = Model;
    type ParentMsg = Msg;

    fn init(
        &self,
        route: Route,
        ctx: &Context<'_, TestProgram>,
    ) -> Update<Model, Msg, SessionMsg> {
        match route {
            Route::Home => home().init((), ctx),
            Route::Counter => counter().init((), ctx),
            Route::Loader => loader().init((), ctx),
            Route::Account => account().init((), ctx),
            Route::Docs(page) => docs().init(page, ctx),
            Route::NotFound => not_found().init((), ctx),
        }
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &Context<'_, TestProgram>,
    ) -> Update<Model, Msg, SessionMsg> {
        match (msg, model) {
            (Msg::Counter(msg), Model::Counter(model)) => counter().update(msg, model, ctx),
            (Msg::Loader(msg), Model::Loader(model)) => loader().update(msg, model, ctx),
            (Msg::Account(msg), Model::Account(model)) => account().update(msg, model, ctx),
            (_, model) => keep(model),
        }
    }

    fn bundle(
        &self,
        model: &Model,
        private: &PrivateContext<'_, TestProgram, Msg>,
        ctx: &Context<'_, TestProgram>,
    ) -> Bundle<View, Msg> {
        match model {
            Model::Home(model) => home().bundle(model, private, ctx),
            Model::Counter(model) => counter().bundle(model, private, ctx),
            Model::Loader(model) => loader().bundle(model, private, ctx),
            Model::Account(model) => account().bundle(model, private, ctx),
            Model::Docs(model) => docs().bundle(model, private, ctx),
            Model::NotFound(model) => not_found().bundle(model, private, ctx),
        }
    }
}

fn home() -> impl Recipe<
    TestProgram,
    Params = (),
    Model = PageModel<(), ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(home_page(), Model::Home, Msg::Home)
}

fn not_found() -> impl Recipe<
    TestProgram,
    Params = (),
    Model = PageModel<(), ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(not_found_page(), Model::NotFound, Msg::NotFound)
}

fn counter() -> impl Recipe<
    TestProgram,
    Params = (),
    Model = PageModel<(), i32>,
    Msg = CounterMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(counter_page(), Model::Counter, Msg::Counter)
}

fn loader() -> impl Recipe<
    TestProgram,
    Params = (),
    Model = PageModel<(), Option<u32>>,
    Msg = LoaderMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(loader_page(), Model::Loader, Msg::Loader)
}

fn account() -> impl Recipe<
    TestProgram,
    Params = (),
    Model = PageModel<(), Account>,
    Msg = AccountMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(account_page(), Model::Account, Msg::Account)
}

/// The docs pages, in their own layout.
fn docs() -> impl Recipe<
    TestProgram,
    Params = String,
    Model = PageModel<String, ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    layout(
        "/docs",
        docs_frame,
        recipe(docs_page(), Model::Docs, Msg::Docs),
    )
}

/// The whole application, in its outermost layout.
fn app() -> impl Recipe<
    TestProgram,
    Params = Route,
    Model = Model,
    Msg = Msg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    layout("/", frame, Pages)
}

fn home_page() -> impl pagecraft::Page<
    TestProgram,
    Params = (),
    Model = (),
    Msg = Infallible,
    View = Node<Infallible>,
> {
    static_page(
        |_: &Ctx<'_>| "Home".to_string(),
        |ctx: &Ctx<'_>| match &ctx.global.user {
            Some(user) => Node::text(format!("Welcome, {user}")),
            None => Node::text("Welcome"),
        },
    )
}

fn not_found_page() -> impl pagecraft::Page<
    TestProgram,
    Params = (),
    Model = (),
    Msg = Infallible,
    View = Node<Infallible>,
> {
    static_page(
        |_: &Ctx<'_>| "Not found".to_string(),
        |_: &Ctx<'_>| Node::text("Nothing here"),
    )
}

fn docs_page() -> impl pagecraft::Page<
    TestProgram,
    Params = String,
    Model = (),
    Msg = Infallible,
    View = Node<Infallible>,
> {
    static_page(
        |ctx: &Ctx<'_, String>| format!("Docs: {}", ctx.params),
        |ctx: &Ctx<'_, String>| Node::text(ctx.params.clone()),
    )
}

fn counter_page() -> impl pagecraft::Page<
    TestProgram,
    Params = (),
    Model = i32,
    Msg = CounterMsg,
    View = Node<CounterMsg>,
> {
    sandbox(
        |count: &i32, _: &Ctx<'_>| format!("Count: {count}"),
        |_: &Ctx<'_>| 0,
        |msg: CounterMsg, count: i32, _: &Ctx<'_>| match msg {
            CounterMsg::Increment => count + 1,
            CounterMsg::Decrement => count - 1,
        },
        |count: &i32, _: &Ctx<'_>| {
            Node::Column(vec![
                Node::text(count.to_string()),
                Node::Button("+".into(), CounterMsg::Increment),
                Node::Button("-".into(), CounterMsg::Decrement),
            ])
        },
    )
}

/// Loads 42 when it starts, and 7 on every reload. Listens to `()` on "reload".
fn loader_page() -> impl pagecraft::Page<
    TestProgram,
    Params = (),
    Model = Option<u32>,
    Msg = LoaderMsg,
    View = Node<LoaderMsg>,
> {
    element(
        |loaded: &Option<u32>, _: &Ctx<'_>| match loaded {
            Some(value) => format!("Loaded {value}"),
            None => "Loading".to_string(),
        },
        |_: &Ctx<'_>| (None, Cmd::perform(async { LoaderMsg::Loaded(42) })),
        |msg: LoaderMsg, _: Option<u32>, _: &Ctx<'_>| match msg {
            LoaderMsg::Reload => (None, Cmd::perform(async { LoaderMsg::Loaded(7) })),
            LoaderMsg::Loaded(value) => (Some(value), Cmd::none()),
        },
        |_: &Option<u32>, _: &Ctx<'_>| Sub::on("reload", |_: &()| LoaderMsg::Reload),
        |_: &Option<u32>, _: &Ctx<'_>| Node::Button("reload".into(), LoaderMsg::Reload),
    )
}

fn account_page() -> impl pagecraft::Page<
    TestProgram,
    Params = (),
    Model = Account,
    Msg = AccountMsg,
    View = Node<AccountMsg>,
> {
    component(
        |_: &Account, _: &Ctx<'_>| "Account".to_string(),
        |_: &Ctx<'_>| Update::new(Account::default()),
        |msg: AccountMsg, mut account: Account, _: &Ctx<'_>| match msg {
            AccountMsg::Echo(n) => {
                account.log.push(n);
                let next = if n % 10 == 0 {
                    Cmd::none()
                } else {
                    send(AccountMsg::Echo(n - 1))
                };
                Update::new(account).with_cmd(next)
            }
            AccountMsg::SignIn(user) => {
                Update::new(account).with_global(send(SessionMsg::SignIn(user)))
            }
            AccountMsg::SignOut => Update::new(account).with_global(send(SessionMsg::SignOut)),
            AccountMsg::GoToCounter => Update::new(account).with_cmd(Cmd::navigate("/counter")),
        },
        |_: &Account, _: &Ctx<'_>| Sub::none(),
        |_: &Account, ctx: &Ctx<'_>| {
            Node::text(ctx.global.user.clone().unwrap_or_else(|| "anonymous".into()))
        },
    )
}

impl Program for TestProgram {
    type Model = Model;

    fn parse_route(&self, path: &Path) -> Route {
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["counter"] => Route::Counter,
            ["loader"] => Route::Loader,
            ["account"] => Route::Account,
            ["docs", page] => Route::Docs((*page).to_string()),
            _ => Route::NotFound,
        }
    }

    fn init_global(&self, _: &Route) -> (Session, Cmd<SessionMsg>) {
        let cmd = match self.remembered {
            Some(user) => Cmd::perform(async move { SessionMsg::SignIn(user.to_string()) }),
            None => Cmd::none(),
        };
        (Session::default(), cmd)
    }

    fn update_global(
        &self,
        msg: SessionMsg,
        global: &mut Session,
        _: &Route,
    ) -> Cmd<SessionMsg> {
        match msg {
            SessionMsg::SignIn(user) => {
                global.user = Some(user);
                Cmd::none()
            }
            SessionMsg::SignOut => {
                global.user = None;
                Cmd::navigate("/")
            }
        }
    }

    fn global_subscriptions(&self, global: &Session) -> Sub<SessionMsg> {
        if global.user.is_some() {
            Sub::on("logout", |_: &()| SessionMsg::SignOut)
        } else {
            Sub::none()
        }
    }

    fn init(&self, ctx: &Context<'_, Self>) -> Update<Model, Msg, SessionMsg> {
        app().init(ctx.route.clone(), ctx)
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &Context<'_, Self>,
    ) -> Update<Model, Msg, SessionMsg> {
        app().update(msg, model, ctx)
    }

    fn bundle(
        &self,
        model: &Model,
        private: &PrivateContext<'_, Self, Msg>,
        ctx: &Context<'_, Self>,
    ) -> Bundle<View, Msg> {
        app().bundle(model, private, ctx)
    }

    fn transitions(&self) -> Vec<TransitionRecord<View>> {
        self.fades
            .iter()
            .map(|&(path, ms)| TransitionRecord::new(path, fade(ms)))
            .collect()
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

/// Start `program` at `path`, with test logging.
pub(crate) fn start(program: TestProgram, path: &str) -> App<TestProgram> {
    let _ = pagecraft::tracing_backend::try_init_test_tracing();
    App::new(program, path)
}

pub(crate) fn start_with(
    program: TestProgram,
    path: &str,
    options: AppOptions,
) -> App<TestProgram> {
    let _ = pagecraft::tracing_backend::try_init_test_tracing();
    App::with_options(program, path, options)
}

pub(crate) fn title(app: &App<TestProgram>) -> String {
    app.render().title
}

pub(crate) fn page(msg: impl Into<Msg>) -> UiMsg<SessionMsg, Msg> {
    UiMsg::Page(msg.into())
}

impl From<CounterMsg> for Msg {
    fn from(msg: CounterMsg) -> Self {
        Self::Counter(msg)
    }
}

impl From<LoaderMsg> for Msg {
    fn from(msg: LoaderMsg) -> Self {
        Self::Loader(msg)
    }
}

impl From<AccountMsg> for Msg {
    fn from(msg: AccountMsg) -> Self {
        Self::Account(msg)
    }
}
