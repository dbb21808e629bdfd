use dioxus::prelude::*;
use quiz_core::model::QuestionDraft;

use super::view::QuizIntent;
use crate::vm::{AnalysisCardVm, QuestionRowVm, WrongAnswerVm};

#[component]
pub fn QuestionCard(row: QuestionRowVm, dispatch: Callback<QuizIntent>) -> Element {
    let question = row.index;

    rsx! {
        article { class: "question-card",
            header {
                h3 { "{row.number}. {row.prompt}" }
                if row.can_edit && !row.editing {
                    button {
                        class: "btn link",
                        onclick: move |_| dispatch.call(QuizIntent::StartEdit(question)),
                        "Edit"
                    }
                }
            }
            ul { class: "options",
                for option in row.options {
                    li { key: "{option.index}",
                        button {
                            class: "{option.state.class()}",
                            disabled: !row.can_edit,
                            onclick: move |_| dispatch.call(QuizIntent::Select {
                                question,
                                option: option.index,
                            }),
                            "{option.text}"
                        }
                    }
                }
            }
            if let Some(explanation) = row.explanation {
                p { class: "explanation", "{explanation}" }
            }
        }
    }
}

#[component]
pub fn EditForm(draft: QuestionDraft, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "edit-form",
            label { "Question"
                textarea {
                    value: "{draft.prompt}",
                    oninput: move |evt| dispatch.call(QuizIntent::EditPrompt(evt.value())),
                }
            }
            for (index, text) in draft.options.iter().cloned().enumerate() {
                div { key: "{index}", class: "edit-option",
                    input {
                        r#type: "radio",
                        name: "correct-option",
                        checked: draft.correct == Some(index),
                        onchange: move |_| dispatch.call(QuizIntent::MarkCorrect(index)),
                    }
                    input {
                        value: "{text}",
                        oninput: move |evt| dispatch.call(QuizIntent::EditOption {
                            option: index,
                            text: evt.value(),
                        }),
                    }
                    if index > 0 {
                        button {
                            class: "btn link",
                            onclick: move |_| dispatch.call(QuizIntent::MoveOptionUp(index)),
                            "Move up"
                        }
                    }
                }
            }
            label { "Explanation"
                textarea {
                    value: "{draft.explanation}",
                    oninput: move |evt| dispatch.call(QuizIntent::EditExplanation(evt.value())),
                }
            }
            div { class: "actions",
                button {
                    class: "btn primary",
                    onclick: move |_| dispatch.call(QuizIntent::SaveEdit),
                    "Save"
                }
                button {
                    class: "btn",
                    onclick: move |_| dispatch.call(QuizIntent::CancelEdit),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
pub fn ResultsPanel(
    score: String,
    submitted_at: String,
    wrong_answers: Vec<WrongAnswerVm>,
    analysis: Vec<AnalysisCardVm>,
) -> Element {
    rsx! {
        section { class: "results",
            h3 { "{score}" }
            if !submitted_at.is_empty() {
                p { class: "muted", "Submitted {submitted_at}" }
            }
            if !wrong_answers.is_empty() {
                h4 { "Review" }
                ul { class: "wrong-answers",
                    for wrong in wrong_answers {
                        li { key: "{wrong.number}",
                            p { "{wrong.number}. {wrong.question}" }
                            p { class: "wrong", "Your answer: {wrong.your_answer}" }
                            p { class: "correct", "Correct answer: {wrong.correct_answer}" }
                        }
                    }
                }
            }
            if !analysis.is_empty() {
                h4 { "Detailed analysis" }
                for (index, card) in analysis.into_iter().enumerate() {
                    div { key: "{index}", class: "analysis-card",
                        h5 { "{card.question}" }
                        p { "{card.text}" }
                        if let Some(url) = card.video_url {
                            a { href: "{url}", target: "_blank", "Watch a related video" }
                        }
                    }
                }
            }
        }
    }
}
