use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use elara_core::catalog::QuizCatalog;
use elara_core::random::fixed_source;
use services::GameSettings;

use crate::context::{UiApp, build_app_context};
use crate::views::{GamesView, HomeView, QuizView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<QuizCatalog>,
    subject: Option<String>,
}

impl UiApp for TestApp {
    fn quiz_catalog(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.catalog)
    }

    fn initial_subject(&self) -> Option<String> {
        self.subject.clone()
    }

    fn game_settings(&self) -> GameSettings {
        GameSettings {
            random: fixed_source(),
            ..GameSettings::default()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Games,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Games => rsx! { GamesView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_subject(view, None)
}

pub fn setup_view_harness_with_subject(view: ViewKind, subject: Option<&str>) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(QuizCatalog::builtin()),
        subject: subject.map(ToString::to_string),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
