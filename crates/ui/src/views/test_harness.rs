use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Analysis, GenerationRequest, Question, WrongAnswer};
use quiz_core::time::fixed_now;
use services::{
    AccountService, AnalysisError, AnswerAnalyzer, AppServices, ClassroomService, Clock,
    GenerationError, QuestionGenerator, QuizService, ServiceConfig,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{
    AssignmentView, ClassroomView, DashboardView, FeedbackView, HomeView, QuizView, SignInView,
    SignUpView,
};

pub struct FixedGenerator;

#[async_trait]
impl QuestionGenerator for FixedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
        Ok(vec![
            Question::new(
                format!("Which planet is largest? ({})", request.topic()),
                vec!["Jupiter".into(), "Mars".into()],
                Some(0),
                Some("Jupiter is a gas giant.".into()),
            )
            .expect("valid question"),
            Question::new(
                "Which planet is closest to the Sun?",
                vec!["Venus".into(), "Mercury".into()],
                Some(1),
                None,
            )
            .expect("valid question"),
        ])
    }
}

pub struct EchoAnalyzer;

#[async_trait]
impl AnswerAnalyzer for EchoAnalyzer {
    async fn analyze(&self, wrong_answers: &[WrongAnswer]) -> Result<Vec<Analysis>, AnalysisError> {
        Ok(wrong_answers
            .iter()
            .map(|wrong| {
                Analysis::new(
                    wrong.question.clone(),
                    format!("{} is not right here.", wrong.user_answer_text),
                    Some("https://www.youtube.com/watch?v=planets"),
                )
            })
            .collect())
    }
}

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn accounts(&self) -> Arc<AccountService> {
        self.services.accounts()
    }

    fn classroom(&self) -> Arc<ClassroomService> {
        self.services.classroom()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    SignIn,
    SignUp,
    Dashboard,
    Classroom(&'static str),
    Assignment(&'static str),
    Quiz,
    Feedback,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
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
        ViewKind::SignIn => rsx! { SignInView {} },
        ViewKind::SignUp => rsx! { SignUpView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Classroom(id) => rsx! { ClassroomView { id: id.to_string() } },
        ViewKind::Assignment(id) => rsx! { AssignmentView { id: id.to_string() } },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Feedback => rsx! { FeedbackView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let clock = Clock::fixed(fixed_now());
    let services =
        AppServices::new(&storage, &ServiceConfig::default(), clock).expect("build services");
    let quiz = Arc::new(
        QuizService::new(Arc::new(FixedGenerator), Arc::new(EchoAnalyzer)).with_clock(clock),
    );
    let quiz_handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { quiz, services }),
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        quiz_handles,
    }
}
