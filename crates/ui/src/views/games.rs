use dioxus::prelude::*;

use elara_core::catalog::GameKind;
use elara_core::model::CellId;
use services::{GameEvent, MathEvent, MemoryEvent, PuzzleEvent};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{BoardVm, GamesVm, MemoryCellVm, start_games};

#[derive(Clone, Debug, PartialEq, Eq)]
enum GamesIntent {
    Event(GameEvent),
    ChangeLevel(String),
}

#[component]
pub fn GamesView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| start_games(&ctx));
    let error = use_signal(|| None::<ViewError>);
    let mut answer = use_signal(String::new);

    let dispatch = use_callback(move |intent: GamesIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Ok(vm) => match intent {
                GamesIntent::Event(event) => vm.dispatch(event),
                GamesIntent::ChangeLevel(label) => vm.change_level(&label),
            },
            Err(err) => Err(*err),
        };
        error.set(result.err());
    });

    let screen = vm.read().as_ref().map(GamesVm::screen).map_err(|err| *err);
    let screen = match screen {
        Ok(screen) => screen,
        Err(err) => {
            return rsx! {
                div { class: "page games",
                    h2 { "🎮 Learning Games" }
                    p { class: "games-error", "{err.message()}" }
                }
            };
        }
    };
    let restart_level = screen.level.to_string();

    rsx! {
        div { class: "page games",
            h2 { "🎮 Learning Games" }
            div { class: "games-toolbar",
                select {
                    class: "games-select",
                    value: "{screen.selected}",
                    onchange: move |evt| {
                        if let Ok(kind) = evt.value().parse::<GameKind>() {
                            dispatch.call(GamesIntent::Event(GameEvent::SelectGame(kind)));
                        }
                    },
                    for game in screen.games.iter() {
                        option {
                            key: "{game.value}",
                            value: "{game.value}",
                            selected: game.value == screen.selected,
                            "{game.label}"
                        }
                    }
                }
                select {
                    class: "games-level-select",
                    value: "{screen.level}",
                    onchange: move |evt| dispatch.call(GamesIntent::ChangeLevel(evt.value())),
                    for level in screen.levels.iter() {
                        option {
                            key: "{level}",
                            value: "{level}",
                            selected: *level == screen.level,
                            "{level}"
                        }
                    }
                }
                button {
                    class: "btn games-restart",
                    r#type: "button",
                    onclick: move |_| dispatch.call(GamesIntent::ChangeLevel(restart_level.clone())),
                    "{screen.restart_label}"
                }
            }
            section { class: "games-info",
                h3 { "{screen.title}" }
                p { "{screen.description}" }
                p { class: "games-levels", "{screen.levels_line}" }
            }
            if let Some(err) = *error.read() {
                p { class: "games-error", "{err.message()}" }
            }
            section { class: "games-board",
                match screen.board.clone() {
                    BoardVm::Memory { rows, complete } => rsx! {
                        div { class: "memory-grid",
                            for (row_index, row) in rows.into_iter().enumerate() {
                                div { key: "{row_index}", class: "memory-row",
                                    for (col, cell) in row.into_iter().enumerate() {
                                        MemoryCellButton {
                                            key: "{col}",
                                            cell,
                                            on_reveal: move |id| {
                                                dispatch.call(GamesIntent::Event(GameEvent::Memory(
                                                    MemoryEvent::Reveal(CellId::new(id)),
                                                )));
                                            },
                                        }
                                    }
                                }
                            }
                        }
                        if complete {
                            p { class: "memory-complete", "All cards revealed! 🎉" }
                        }
                    },
                    BoardVm::Puzzle { snippets } => rsx! {
                        p { "Arrange the code snippets in the correct order:" }
                        ol { class: "puzzle-snippets",
                            for (index, snippet) in snippets.into_iter().enumerate() {
                                li { key: "{index}", code { "{snippet}" } }
                            }
                        }
                        button {
                            class: "btn puzzle-check",
                            r#type: "button",
                            onclick: move |_| {
                                dispatch.call(GamesIntent::Event(GameEvent::Puzzle(PuzzleEvent::CheckSolution)));
                            },
                            "Check Solution"
                        }
                    },
                    BoardVm::Math { prompt } => rsx! {
                        p { class: "math-prompt", "{prompt}" }
                        input {
                            class: "math-answer",
                            r#type: "text",
                            placeholder: "Your answer",
                            value: "{answer}",
                            oninput: move |evt| answer.set(evt.value()),
                        }
                        button {
                            class: "btn math-submit",
                            r#type: "button",
                            onclick: move |_| {
                                let raw = answer();
                                answer.set(String::new());
                                dispatch.call(GamesIntent::Event(GameEvent::Math(MathEvent::Submit(raw))));
                            },
                            "Submit"
                        }
                    },
                }
            }
            if let Some(feedback) = screen.feedback.clone() {
                p { class: "{feedback.class}", "{feedback.text}" }
            }
            if let Some(score_line) = screen.score_line.clone() {
                p { class: "games-score", "{score_line}" }
            }
        }
    }
}

#[component]
fn MemoryCellButton(cell: MemoryCellVm, on_reveal: EventHandler<usize>) -> Element {
    let id = cell.id;
    let class = if cell.revealed {
        "memory-cell memory-cell--revealed"
    } else {
        "memory-cell"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: cell.revealed,
            onclick: move |_| on_reveal.call(id),
            "{cell.face}"
        }
    }
}
