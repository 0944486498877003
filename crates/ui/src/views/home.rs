use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let subject_count = ctx.quiz_catalog().len();
    let game_count = ctx.game_catalog().games().len();

    rsx! {
        div { class: "page home",
            h2 { "Welcome to ELARA" }
            p { class: "home-tagline", "Pick a quiz subject or play a learning game." }
            div { class: "home-cards",
                Link { class: "home-card", to: Route::Quiz {},
                    h3 { "🎯 Interactive Quiz" }
                    p { "Subjects available: {subject_count}" }
                }
                Link { class: "home-card", to: Route::Games {},
                    h3 { "🎮 Learning Games" }
                    p { "Games available: {game_count}" }
                }
            }
        }
    }
}
