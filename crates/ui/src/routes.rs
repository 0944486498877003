use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, StartPage};
use crate::views::{GamesView, HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/games", GamesView)] Games {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    use_hook(move || {
        let start = match ctx.start_page() {
            StartPage::Home => None,
            StartPage::Quiz => Some(Route::Quiz {}),
            StartPage::Games => Some(Route::Games {}),
        };
        if let Some(route) = start {
            let _ = navigator.replace(route);
        }
    });

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "ELARA" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "🎯 Quiz" } }
                li { Link { to: Route::Games {}, "🎮 Games" } }
            }
        }
    }
}
