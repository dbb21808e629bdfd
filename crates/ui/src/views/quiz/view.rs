use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::GenerationRequest;
use services::{AnalysisTicket, GenerationTicket, QuizService};

use super::components::{EditForm, QuestionCard, ResultsPanel};
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{FormError, QuizVm, parse_generation_form};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum QuizIntent {
    Generate(GenerationRequest),
    Regenerate,
    Select { question: usize, option: usize },
    StartEdit(usize),
    EditPrompt(String),
    EditOption { option: usize, text: String },
    EditExplanation(String),
    MarkCorrect(usize),
    MoveOptionUp(usize),
    SaveEdit,
    CancelEdit,
    Submit,
    Export,
    DismissError,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();

    let vm = use_signal({
        let quiz = quiz.clone();
        move || QuizVm::new(quiz.new_session())
    });
    let mut topic = use_signal(String::new);
    let mut count = use_signal(|| "5".to_string());
    let mut form_error = use_signal(|| None::<FormError>);
    let notice = use_signal(|| None::<String>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut notice = notice;
        let quiz = quiz.clone();

        match intent {
            QuizIntent::Generate(request) => {
                notice.set(None);
                let ticket = vm.write().session_mut().begin_generation(request);
                match ticket {
                    Ok(ticket) => run_generation(quiz, vm, ticket),
                    Err(err) => notice.set(Some(err.to_string())),
                }
            }
            QuizIntent::Regenerate => {
                notice.set(None);
                let ticket = vm.write().session_mut().begin_regeneration();
                match ticket {
                    Ok(ticket) => run_generation(quiz, vm, ticket),
                    Err(err) => notice.set(Some(err.to_string())),
                }
            }
            QuizIntent::Select { question, option } => {
                if let Err(err) = vm.write().session_mut().select_answer(question, option) {
                    tracing::debug!(error = %err, "selection ignored");
                }
            }
            QuizIntent::StartEdit(index) => {
                if let Err(err) = vm.write().session_mut().start_edit(index) {
                    notice.set(Some(err.to_string()));
                }
            }
            QuizIntent::EditPrompt(text) => {
                if let Ok(draft) = vm.write().session_mut().edit_draft_mut() {
                    draft.set_prompt(text);
                }
            }
            QuizIntent::EditOption { option, text } => {
                if let Ok(draft) = vm.write().session_mut().edit_draft_mut() {
                    if let Err(err) = draft.set_option(option, text) {
                        tracing::debug!(error = %err, option, "option edit ignored");
                    }
                }
            }
            QuizIntent::EditExplanation(text) => {
                if let Ok(draft) = vm.write().session_mut().edit_draft_mut() {
                    draft.set_explanation(text);
                }
            }
            QuizIntent::MarkCorrect(option) => {
                if let Ok(draft) = vm.write().session_mut().edit_draft_mut() {
                    if let Err(err) = draft.set_correct(option) {
                        tracing::debug!(error = %err, option, "correct option ignored");
                    }
                }
            }
            QuizIntent::MoveOptionUp(option) => {
                if let Ok(draft) = vm.write().session_mut().edit_draft_mut() {
                    if option > 0 {
                        if let Err(err) = draft.swap_options(option - 1, option) {
                            tracing::debug!(error = %err, option, "option move ignored");
                        }
                    }
                }
            }
            QuizIntent::SaveEdit => {
                let saved = vm.write().session_mut().save_edit().map(|_| ());
                match saved {
                    Ok(()) => notice.set(None),
                    Err(err) => notice.set(Some(err.to_string())),
                }
            }
            QuizIntent::CancelEdit => {
                vm.write().session_mut().cancel_edit();
            }
            QuizIntent::Submit => {
                let ticket = vm.write().session_mut().submit();
                match ticket {
                    Ok(Some(ticket)) => run_analysis(quiz, vm, ticket),
                    Ok(None) => notice.set(None),
                    Err(err) => notice.set(Some(err.to_string())),
                }
            }
            QuizIntent::Export => {
                let saved = std::env::current_dir()
                    .map_err(|_| ViewError::ExportFailed)
                    .and_then(|dir| vm.read().export_to(&dir));
                match saved {
                    Ok(path) => notice.set(Some(format!("Saved {}", path.display()))),
                    Err(err) => notice.set(Some(err.message().to_string())),
                }
            }
            QuizIntent::DismissError => {
                vm.write().session_mut().dismiss_failure();
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_generate = move |_| match parse_generation_form(&topic(), &count()) {
        Ok(request) => {
            form_error.set(None);
            dispatch.call(QuizIntent::Generate(request));
        }
        Err(err) => form_error.set(Some(err)),
    };

    let state = vm.read();
    let rows = state.rows();
    let draft = state.session().draft().cloned();
    let editing_index = state.session().editing_index();

    rsx! {
        div { class: "page quiz",
            h2 { "MCQ Generator" }

            section { class: "quiz-form",
                label { "Describe the topic"
                    textarea {
                        rows: "4",
                        value: "{topic}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                label { "Number of questions"
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{count}",
                        oninput: move |evt| count.set(evt.value()),
                    }
                }
                if let Some(err) = form_error() {
                    p { class: "error", "{err.message()}" }
                }
                div { class: "actions",
                    button {
                        id: "quiz-generate",
                        class: "btn primary",
                        disabled: state.generate_disabled(),
                        onclick: on_generate,
                        "{state.generate_label()}"
                    }
                    if state.can_regenerate() {
                        button {
                            id: "quiz-regenerate",
                            class: "btn",
                            onclick: move |_| dispatch.call(QuizIntent::Regenerate),
                            "Regenerate"
                        }
                    }
                    if state.has_questions() {
                        button {
                            id: "quiz-export",
                            class: "btn",
                            onclick: move |_| dispatch.call(QuizIntent::Export),
                            "Export JSON"
                        }
                    }
                }
            }

            if let Some(status) = state.status_line() {
                p { class: "status", "{status}" }
            }
            if let Some(message) = state.error_message() {
                div { class: "error banner",
                    span { title: state.error_detail().unwrap_or_default(), "{message}" }
                    button {
                        class: "btn link",
                        onclick: move |_| dispatch.call(QuizIntent::DismissError),
                        "Dismiss"
                    }
                }
            }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }

            if !rows.is_empty() {
                section { class: "questions",
                    for row in rows {
                        QuestionCard { key: "{row.index}", row: row.clone(), dispatch }
                        if editing_index == Some(row.index) {
                            if let Some(draft) = draft.clone() {
                                EditForm { draft, dispatch }
                            }
                        }
                    }
                }
                if state.show_submit() {
                    div { class: "actions",
                        span { class: "progress", "{state.progress_line()}" }
                        button {
                            id: "quiz-submit",
                            class: "btn primary",
                            disabled: state.submit_disabled(),
                            onclick: move |_| dispatch.call(QuizIntent::Submit),
                            "Submit answers"
                        }
                    }
                }
            }

            if let Some(score) = state.score_line() {
                ResultsPanel {
                    score,
                    submitted_at: state.submitted_at_str().unwrap_or_default(),
                    wrong_answers: state.wrong_answers(),
                    analysis: state.analysis_cards(),
                }
            }
        }
    }
}

fn run_generation(quiz: Arc<QuizService>, mut vm: Signal<QuizVm>, ticket: GenerationTicket) {
    spawn(async move {
        let outcome = quiz.fetch_questions(&ticket).await;
        vm.write()
            .session_mut()
            .complete_generation(&ticket, outcome);
    });
}

fn run_analysis(
    quiz: Arc<QuizService>,
    mut vm: Signal<QuizVm>,
    ticket: AnalysisTicket,
) {
    spawn(async move {
        let outcome = quiz.fetch_analysis(&ticket).await;
        vm.write()
            .session_mut()
            .complete_analysis(&ticket, outcome);
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
