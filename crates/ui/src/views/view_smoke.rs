use quiz_core::model::{GenerationRequest, SessionPhase};
use quiz_core::time::fixed_now;
use storage::repository::TokenKind;

use super::QuizIntent;
use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_links_to_generator() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Try the MCQ generator"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_renders_metrics() {
    let mut harness = setup_view_harness(ViewKind::Feedback);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Readability Score"), "missing metric in {html}");
    assert!(html.contains("63.4%"), "missing readability value in {html}");
    assert!(html.contains("7/10"), "missing evaluation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_view_smoke_reports_disabled_backend() {
    let mut harness = setup_view_harness(ViewKind::SignIn);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Accounts are not configured"),
        "missing notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn sign_up_view_smoke_offers_roles() {
    let mut harness = setup_view_harness(ViewKind::SignUp);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("student"), "missing role in {html}");
    assert!(html.contains("teacher"), "missing role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_asks_to_connect() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Connect your classroom"), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_with_token_tries_listing() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness
        .storage
        .tokens
        .save_token(TokenKind::Classroom, "token", fixed_now())
        .await
        .unwrap();
    harness.rebuild();
    let html = harness.render();
    assert!(
        !html.contains("Connect your classroom"),
        "unexpected connect prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate MCQs"), "missing button in {html}");
    assert!(!html.contains("Submit answers"), "unexpected submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_generate_answer_submit_flow() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    let vm = harness.quiz_handles.vm();
    let request = GenerationRequest::new("Planets", 2).unwrap();

    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::Generate(request)));
    harness.drive_async().await;
    assert_eq!(
        harness.dom.in_runtime(|| vm.read().phase()),
        SessionPhase::Reviewing
    );
    let html = harness.render();
    assert!(html.contains("Which planet is largest? (Planets)"), "missing question in {html}");
    assert!(html.contains("Submit answers"), "missing submit in {html}");

    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::Select { question: 0, option: 0 });
        dispatch.call(QuizIntent::Select { question: 1, option: 0 });
        dispatch.call(QuizIntent::Submit);
    });
    harness.drive_async().await;

    assert_eq!(
        harness.dom.in_runtime(|| vm.read().phase()),
        SessionPhase::AnalysisReady
    );
    let html = harness.render();
    assert!(html.contains("You scored 1 out of 2 (50%)"), "missing score in {html}");
    assert!(html.contains("Venus is not right here."), "missing analysis in {html}");
    assert!(html.contains("Jupiter is a gas giant."), "missing explanation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_edit_then_cancel_keeps_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    let vm = harness.quiz_handles.vm();
    let request = GenerationRequest::new("Planets", 2).unwrap();
    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::Generate(request)));
    harness.drive_async().await;

    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::StartEdit(1));
        dispatch.call(QuizIntent::EditPrompt("Changed?".into()));
    });
    harness.drive_async().await;
    assert!(harness.render().contains("Changed?"));

    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::CancelEdit));
    harness.drive_async().await;
    let prompt = harness
        .dom
        .in_runtime(|| vm.read().session().questions()[1].prompt().to_string());
    assert_eq!(prompt, "Which planet is closest to the Sun?");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_ignores_out_of_range_draft_edits() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    let vm = harness.quiz_handles.vm();
    let request = GenerationRequest::new("Planets", 2).unwrap();
    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::Generate(request)));
    harness.drive_async().await;

    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::StartEdit(0));
        dispatch.call(QuizIntent::EditOption {
            option: 9,
            text: "Saturn".into(),
        });
        dispatch.call(QuizIntent::MarkCorrect(9));
        dispatch.call(QuizIntent::MoveOptionUp(9));
    });
    harness.drive_async().await;

    let draft = harness
        .dom
        .in_runtime(|| vm.read().session().draft().cloned())
        .expect("draft stays open");
    assert_eq!(draft.options, ["Jupiter", "Mars"]);
    assert_eq!(draft.correct, Some(0));
    assert!(!harness.render().contains("Saturn"));

    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::SaveEdit));
    harness.drive_async().await;
    let options = harness
        .dom
        .in_runtime(|| vm.read().session().questions()[0].options().to_vec());
    assert_eq!(options, ["Jupiter", "Mars"]);
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_smoke_lists_assignments() {
    let mut harness = setup_view_harness(ViewKind::Classroom("c-42"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Advanced Mathematics"), "missing title in {html}");
    assert!(html.contains("Course ID: c-42"), "missing id in {html}");
    assert!(html.contains("Linear Algebra Quiz"), "missing assignment in {html}");
    assert!(html.contains("Due: 2025-03-20"), "missing due date in {html}");
    assert!(html.contains("95/100"), "missing score in {html}");
    assert!(html.contains("Vector Calculus Assignment"), "missing assignment link in {html}");
    assert!(!html.contains("emma.t@example.com"), "students tab shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assignment_view_smoke_renders_details_and_progress() {
    let mut harness = setup_view_harness(ViewKind::Assignment("2"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Vector Calculus Quiz"), "missing title in {html}");
    assert!(html.contains("Due: March 25, 2025"), "missing due date in {html}");
    assert!(html.contains("Instructions"), "missing instructions in {html}");
    assert!(html.contains("2 of 3 problems completed"), "missing progress in {html}");
    assert!(html.contains("width: 67%"), "missing progress bar in {html}");
    assert!(html.contains("Problem 3 pending"), "missing status in {html}");
}
