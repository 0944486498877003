use dioxus::prelude::*;

use services::QuizEvent;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{CompletionVm, OptionVm, QuizVm, start_quiz};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| start_quiz(&ctx));
    let error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |event: QuizEvent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Ok(vm) => vm.dispatch(event),
            Err(err) => Err(*err),
        };
        error.set(result.err());
    });

    let screen = vm.read().as_ref().map(QuizVm::screen).map_err(|err| *err);
    let screen = match screen {
        Ok(screen) => screen,
        Err(err) => {
            return rsx! {
                div { class: "page quiz",
                    h2 { "🎯 Interactive Quiz" }
                    p { class: "quiz-error", "{err.message()}" }
                }
            };
        }
    };

    rsx! {
        div { class: "page quiz",
            aside { class: "quiz-sidebar",
                h3 { "Select Subject" }
                select {
                    class: "quiz-subject-select",
                    value: "{screen.subject}",
                    onchange: move |evt| dispatch.call(QuizEvent::SelectSubject(evt.value())),
                    for subject in screen.subjects.iter() {
                        option {
                            key: "{subject}",
                            value: "{subject}",
                            selected: *subject == screen.subject,
                            "{subject}"
                        }
                    }
                }
                p { class: "quiz-score", "{screen.score_line}" }
            }
            section { class: "quiz-main",
                h2 { "🎯 Interactive Quiz" }
                h3 { class: "quiz-subject", "{screen.subject}" }
                div { class: "quiz-progress",
                    div {
                        class: "quiz-progress__bar",
                        style: "width: {screen.progress_percent}%",
                    }
                }
                if let Some(err) = *error.read() {
                    p { class: "quiz-error", "{err.message()}" }
                }
                if let Some(completion) = screen.completion.clone() {
                    QuizCompletion {
                        completion,
                        on_restart: move |_| dispatch.call(QuizEvent::Restart),
                    }
                } else {
                    if let Some(heading) = screen.heading.clone() {
                        h3 { class: "quiz-question__heading", "{heading}" }
                    }
                    if let Some(prompt) = screen.prompt.clone() {
                        p { class: "quiz-question__prompt", "{prompt}" }
                    }
                    div { class: "quiz-options",
                        for (position, option) in screen.options.clone().into_iter().enumerate() {
                            QuizOptionButton {
                                key: "{position}",
                                option,
                                enabled: screen.options_enabled,
                                on_select: move |index| dispatch.call(QuizEvent::SelectOption(index)),
                            }
                        }
                    }
                    if let Some(feedback) = screen.feedback.clone() {
                        p { class: "{feedback.class}", "{feedback.text}" }
                    }
                    if screen.show_next {
                        button {
                            class: "btn quiz-next",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizEvent::Advance),
                            "Next Question"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizOptionButton(option: OptionVm, enabled: bool, on_select: EventHandler<usize>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "quiz-option",
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| on_select.call(index),
            "{option.label}"
        }
    }
}

#[component]
fn QuizCompletion(completion: CompletionVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-complete",
            if completion.celebrate {
                p { class: "quiz-complete__celebrate", "🎉" }
            }
            h3 { class: "quiz-complete__title", "{completion.score_line}" }
            p { "{completion.percentage_line}" }
            p { class: "quiz-complete__tier", "{completion.tier_message}" }
            button {
                class: "btn quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}
