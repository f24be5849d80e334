// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

//! A Pagecraft application in the terminal, with one page of each kind.
//!
//! Type `click <label>` to press a button, `go <path>` to navigate, `tick` to
//! publish a clock tick, and `quit` to leave. Try `RUST_LOG=trace` to see every
//! message being handled.

use std::convert::Infallible;
use std::fmt::Write as _;
use std::io::BufRead;
use std::time::Duration;

use pagecraft::{
    App, Bundle, Chrome, Cmd, Context, MapMessage, PageContext, PageModel, Path, PrivateContext,
    Program, Recipe, Spa, Sub, Transition, TransitionRecord, UiMsg, Update, component, element,
    keep, layout, recipe, sandbox, send, static_page,
};
use web_time::Instant;

/// A minimal markup tree.
#[derive(Debug, Clone)]
enum Html<Msg> {
    Text(String),
    Button(String, Msg),
    Div(Vec<Self>),
    Class(&'static str, Box<Self>),
}

impl<Msg> Html<Msg> {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn button(label: impl Into<String>, msg: Msg) -> Self {
        Self::Button(label.into(), msg)
    }

    fn class(class: &'static str, child: Self) -> Self {
        Self::Class(class, Box::new(child))
    }

    fn find(&self, label: &str) -> Option<&Msg> {
        match self {
            Self::Text(_) => None,
            Self::Button(text, msg) => (text == label).then_some(msg),
            Self::Div(children) => children.iter().find_map(|child| child.find(label)),
            Self::Class(_, child) => child.find(label),
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Text(text) => {
                let _ = writeln!(out, "{indent}{text}");
            }
            Self::Button(label, _) => {
                let _ = writeln!(out, "{indent}[{label}]");
            }
            Self::Div(children) => {
                for child in children {
                    child.write(out, depth);
                }
            }
            Self::Class(class, child) => {
                let _ = writeln!(out, "{indent}<{class}>");
                child.write(out, depth + 1);
            }
        }
    }
}

impl<From, To> MapMessage<From, To> for Html<From> {
    type Output = Html<To>;

    fn map_message(self, f: impl Fn(From) -> To + Clone + 'static) -> Html<To> {
        match self {
            Self::Text(text) => Html::Text(text),
            Self::Button(label, msg) => Html::Button(label, f(msg)),
            Self::Div(children) => Html::Div(
                children
                    .into_iter()
                    .map(|child| child.map_message(f.clone()))
                    .collect(),
            ),
            Self::Class(class, child) => Html::Class(class, Box::new((*child).map_message(f))),
        }
    }
}

struct Demo;

type View = Html<UiMsg<SessionMsg, Msg>>;
type Ctx<'a, Params = ()> = PageContext<'a, Demo, Params>;

impl Spa for Demo {
    type Global = Session;
    type GlobalMsg = SessionMsg;
    type Route = Route;
    type Msg = Msg;
    type View = View;
}

#[derive(Debug, Default)]
struct Session {
    user: Option<String>,
}

#[derive(Debug, Clone)]
enum SessionMsg {
    SignIn(String),
    SignOut,
}

#[derive(Debug, Clone)]
enum Route {
    Home,
    Counter,
    Clock,
    Profile(String),
    NotFound,
}

#[derive(Debug)]
enum Model {
    Home(PageModel<(), ()>),
    Counter(PageModel<(), i32>),
    Clock(PageModel<(), Clock>),
    Profile(PageModel<String, Profile>),
    NotFound(PageModel<(), ()>),
}

#[derive(Debug, Clone)]
enum Msg {
    Home(Infallible),
    Counter(CounterMsg),
    Clock(ClockMsg),
    Profile(ProfileMsg),
    NotFound(Infallible),
}

#[derive(Debug, Clone, Copy)]
enum CounterMsg {
    Increment,
    Decrement,
}

#[derive(Debug, Default)]
struct Clock {
    elapsed: Duration,
    running: bool,
}

#[derive(Debug, Clone, Copy)]
enum ClockMsg {
    Tick(Duration),
    Toggle,
}

#[derive(Debug, Default)]
struct Profile {
    saving: bool,
    saved: u32,
}

#[derive(Debug, Clone)]
enum ProfileMsg {
    Save,
    Saved,
    SignIn,
}

fn home() -> impl Recipe<
    Demo,
    Params = (),
    Model = PageModel<(), ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(
        static_page(
            |_: &Ctx<'_>| "Home".to_string(),
            |ctx: &Ctx<'_>| -> Html<Infallible> {
                match &ctx.global.user {
                    Some(user) => Html::text(format!("Welcome back, {user}!")),
                    None => Html::text("Welcome! Try `go /counter` or `go /profile/ada`."),
                }
            },
        ),
        Model::Home,
        Msg::Home,
    )
}

fn not_found() -> impl Recipe<
    Demo,
    Params = (),
    Model = PageModel<(), ()>,
    Msg = Infallible,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(
        static_page(
            |_: &Ctx<'_>| "Not found".to_string(),
            |_: &Ctx<'_>| -> Html<Infallible> { Html::text("There is no page here.") },
        ),
        Model::NotFound,
        Msg::NotFound,
    )
}

fn counter() -> impl Recipe<
    Demo,
    Params = (),
    Model = PageModel<(), i32>,
    Msg = CounterMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(
        sandbox(
            |count: &i32, _: &Ctx<'_>| format!("Counter ({count})"),
            |_: &Ctx<'_>| 0,
            |msg: CounterMsg, count: i32, _: &Ctx<'_>| match msg {
                CounterMsg::Increment => count + 1,
                CounterMsg::Decrement => count - 1,
            },
            |count: &i32, _: &Ctx<'_>| {
                Html::Div(vec![
                    Html::text(format!("Count: {count}")),
                    Html::button("+", CounterMsg::Increment),
                    Html::button("-", CounterMsg::Decrement),
                ])
            },
        ),
        Model::Counter,
        Msg::Counter,
    )
}

fn clock() -> impl Recipe<
    Demo,
    Params = (),
    Model = PageModel<(), Clock>,
    Msg = ClockMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(
        element(
            |clock: &Clock, _: &Ctx<'_>| format!("Clock ({}s)", clock.elapsed.as_secs()),
            |_: &Ctx<'_>| {
                let clock = Clock {
                    running: true,
                    ..Clock::default()
                };
                (clock, Cmd::none())
            },
            |msg: ClockMsg, mut clock: Clock, _: &Ctx<'_>| {
                match msg {
                    ClockMsg::Tick(step) => clock.elapsed += step,
                    ClockMsg::Toggle => clock.running = !clock.running,
                }
                (clock, Cmd::none())
            },
            |clock: &Clock, _: &Ctx<'_>| {
                if clock.running {
                    Sub::on("tick", |step: &Duration| ClockMsg::Tick(*step))
                } else {
                    Sub::none()
                }
            },
            |clock: &Clock, _: &Ctx<'_>| {
                let toggle = if clock.running { "pause" } else { "resume" };
                Html::Div(vec![
                    Html::text(format!("{}s", clock.elapsed.as_secs())),
                    Html::button(toggle, ClockMsg::Toggle),
                ])
            },
        ),
        Model::Clock,
        Msg::Clock,
    )
}

fn profile() -> impl Recipe<
    Demo,
    Params = String,
    Model = PageModel<String, Profile>,
    Msg = ProfileMsg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    recipe(
        component(
            |_: &Profile, ctx: &Ctx<'_, String>| format!("Profile of {}", ctx.params),
            |_: &Ctx<'_, String>| Update::new(Profile::default()),
            |msg: ProfileMsg, mut profile: Profile, ctx: &Ctx<'_, String>| match msg {
                ProfileMsg::Save => {
                    profile.saving = true;
                    Update::new(profile).with_cmd(Cmd::perform(async { ProfileMsg::Saved }))
                }
                ProfileMsg::Saved => {
                    profile.saving = false;
                    profile.saved += 1;
                    Update::new(profile)
                }
                ProfileMsg::SignIn => Update::new(profile)
                    .with_global(send(SessionMsg::SignIn(ctx.params.clone()))),
            },
            |_: &Profile, _: &Ctx<'_, String>| Sub::none(),
            |profile: &Profile, ctx: &Ctx<'_, String>| {
                let status = if profile.saving {
                    "Saving...".to_string()
                } else {
                    format!("Saved {} times", profile.saved)
                };
                Html::Div(vec![
                    Html::text(format!("This is {}.", ctx.params)),
                    Html::text(status),
                    Html::button("save", ProfileMsg::Save),
                    Html::button(format!("sign in as {}", ctx.params), ProfileMsg::SignIn),
                ])
            },
        ),
        Model::Profile,
        Msg::Profile,
    )
}

struct Pages;

impl Recipe<Demo> for Pages {
    type Params = Route;
    type Model = Model;
    type Msg = Msg;
    type ParentModel = Model;
    type ParentMsg = Msg;

    fn init(&self, route: Route, ctx: &Context<'_, Demo>) -> Update<Model, Msg, SessionMsg> {
        match route {
            Route::Home => home().init((), ctx),
            Route::Counter => counter().init((), ctx),
            Route::Clock => clock().init((), ctx),
            Route::Profile(name) => profile().init(name, ctx),
            Route::NotFound => not_found().init((), ctx),
        }
    }

    fn update(
        &self,
        msg: Msg,
        model: Model,
        ctx: &Context<'_, Demo>,
    ) -> Update<Model, Msg, SessionMsg> {
        match (msg, model) {
            (Msg::Counter(msg), Model::Counter(model)) => counter().update(msg, model, ctx),
            (Msg::Clock(msg), Model::Clock(model)) => clock().update(msg, model, ctx),
            (Msg::Profile(msg), Model::Profile(model)) => profile().update(msg, model, ctx),
            (_, model) => keep(model),
        }
    }

    fn bundle(
        &self,
        model: &Model,
        private: &PrivateContext<'_, Demo, Msg>,
        ctx: &Context<'_, Demo>,
    ) -> Bundle<View, Msg> {
        match model {
            Model::Home(model) => home().bundle(model, private, ctx),
            Model::Counter(model) => counter().bundle(model, private, ctx),
            Model::Clock(model) => clock().bundle(model, private, ctx),
            Model::Profile(model) => profile().bundle(model, private, ctx),
            Model::NotFound(model) => not_found().bundle(model, private, ctx),
        }
    }
}

fn navbar(chrome: Chrome<'_, Demo>) -> View {
    let session = match &chrome.global.user {
        Some(user) => Html::Div(vec![
            Html::text(format!("Signed in as {user}")),
            Html::button("sign out", chrome.global_msg(SessionMsg::SignOut)),
        ]),
        None => Html::text("Not signed in"),
    };
    Html::Div(vec![
        Html::class(
            "nav",
            Html::Div(vec![Html::text("Home | Counter | Clock"), session]),
        ),
        chrome.page,
    ])
}

fn app() -> impl Recipe<
    Demo,
    Params = Route,
    Model = Model,
    Msg = Msg,
    ParentModel = Model,
    ParentMsg = Msg,
> {
    layout("/", navbar, Pages)
}

impl Program for Demo {
    type Model = Model;

    fn parse_route(&self, path: &Path) -> Route {
        match path.segments() {
            [] => Route::Home,
            [page] if page == "counter" => Route::Counter,
            [page] if page == "clock" => Route::Clock,
            [page, name] if page == "profile" => Route::Profile(name.clone()),
            _ => Route::NotFound,
        }
    }

    fn init_global(&self, _: &Route) -> (Session, Cmd<SessionMsg>) {
        (Session::default(), Cmd::none())
    }

    fn update_global(&self, msg: SessionMsg, global: &mut Session, _: &Route) -> Cmd<SessionMsg> {
        match msg {
            SessionMsg::SignIn(user) => {
                tracing::info!(%user, "Signed in");
                global.user = Some(user);
                Cmd::none()
            }
            SessionMsg::SignOut => {
                global.user = None;
                Cmd::navigate("/")
            }
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
        vec![TransitionRecord::new(
            "/",
            Transition::custom(
                Duration::from_millis(150),
                |view| Html::class("fade-out", view),
                |view| Html::class("fade-in", view),
            ),
        )]
    }
}

fn show(app: &App<Demo>) {
    let bundle = app.render();
    let mut out = String::new();
    bundle.view.write(&mut out, 1);
    println!("== {} ({:?}) ==", bundle.title, app.status());
    print!("{out}");
}

fn main() {
    let _ = pagecraft::tracing_backend::try_init_tracing();

    let mut app = App::new(Demo, "/");
    show(&app);
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let (command, argument) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
        match command {
            "click" => match app.render().view.find(argument).cloned() {
                Some(msg) => app.dispatch(msg),
                None => println!("There is no button labelled {argument:?}."),
            },
            "go" => app.navigate(argument),
            "tick" => {
                app.publish("tick", &Duration::from_secs(1));
            }
            "quit" => break,
            "" => {}
            _ => println!("Unknown command {command:?}."),
        }
        app.run_until_stalled();
        // Let transitions finish before drawing the next screen.
        app.advance(Instant::now());
        while app.is_navigating() {
            std::thread::sleep(Duration::from_millis(50));
            app.advance(Instant::now());
        }
        app.run_until_stalled();
        show(&app);
    }
}
