use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::model::{Analysis, GenerationRequest, Question, SessionPhase, WrongAnswer};
use quiz_core::time::fixed_now;
use services::{
    AnalysisError, AnswerAnalyzer, Clock, CompletionOutcome, GenerationError, QuestionGenerator,
    QuizError, QuizService, SessionFailure,
};

struct ScriptedGenerator {
    calls: AtomicUsize,
}

#[async_trait]
impl QuestionGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            return Err(GenerationError::EmptyResponse);
        }
        let count = usize::try_from(request.question_count()).unwrap();
        Ok((0..count)
            .map(|i| {
                Question::new(
                    format!("{} #{i} (round {call})", request.topic()),
                    vec!["right".into(), "wrong".into()],
                    Some(0),
                    None,
                )
                .unwrap()
            })
            .collect())
    }
}

#[derive(Default)]
struct EchoAnalyzer {
    fail: bool,
}

#[async_trait]
impl AnswerAnalyzer for EchoAnalyzer {
    async fn analyze(&self, wrong_answers: &[WrongAnswer]) -> Result<Vec<Analysis>, AnalysisError> {
        if self.fail {
            return Err(AnalysisError::Malformed("expected a list".into()));
        }
        Ok(wrong_answers
            .iter()
            .map(|wrong| {
                Analysis::new(
                    wrong.question.clone(),
                    format!("You chose {}.", wrong.user_answer_text),
                    None,
                )
            })
            .collect())
    }
}

fn service(analyzer: EchoAnalyzer) -> QuizService {
    QuizService::new(
        Arc::new(ScriptedGenerator {
            calls: AtomicUsize::new(0),
        }),
        Arc::new(analyzer),
    )
    .with_clock(Clock::fixed(fixed_now()))
}

#[tokio::test]
async fn generate_retry_answer_and_analyse() {
    let quiz = service(EchoAnalyzer::default());
    let mut session = quiz.new_session();
    let request = GenerationRequest::new("Chemistry", 3).unwrap();

    let outcome = quiz.generate(&mut session, request.clone()).await.unwrap();
    assert_eq!(outcome, CompletionOutcome::Failed);
    assert_eq!(session.phase(), SessionPhase::Error);
    assert!(matches!(session.failure(), Some(SessionFailure::Generation(_))));

    let outcome = quiz.regenerate(&mut session).await.unwrap();
    assert_eq!(outcome, CompletionOutcome::Applied);
    assert_eq!(session.questions().len(), 3);
    assert!(session.failure().is_none());

    session.select_answer(0, 0).unwrap();
    session.select_answer(1, 1).unwrap();
    session.select_answer(2, 1).unwrap();

    let outcome = quiz.submit(&mut session).await.unwrap();
    assert_eq!(outcome, Some(CompletionOutcome::Applied));
    assert_eq!(session.phase(), SessionPhase::AnalysisReady);

    let result = session.result().unwrap();
    assert_eq!((result.correct(), result.total()), (1, 3));
    assert_eq!(result.percentage(), 33);
    assert_eq!(session.analysis().len(), 2);
    assert_eq!(session.analysis()[0].analysis_text(), "You chose wrong.");
}

#[tokio::test]
async fn analysis_failure_is_surfaced_without_losing_score() {
    let quiz = service(EchoAnalyzer { fail: true });
    let mut session = quiz.new_session();
    let request = GenerationRequest::new("Biology", 2).unwrap();

    quiz.generate(&mut session, request).await.unwrap();
    quiz.regenerate(&mut session).await.unwrap();
    session.select_answer(0, 1).unwrap();
    session.select_answer(1, 0).unwrap();

    let outcome = quiz.submit(&mut session).await.unwrap();
    assert_eq!(outcome, Some(CompletionOutcome::Failed));
    assert_eq!(session.phase(), SessionPhase::Submitted);
    assert_eq!(session.result().unwrap().correct(), 1);
    let failure = session.failure().unwrap();
    assert_eq!(
        failure.message(),
        "Failed to get detailed analysis. Please try again."
    );

    session.dismiss_failure();
    assert!(session.failure().is_none());
}

#[tokio::test]
async fn perfect_attempt_makes_no_analysis_call() {
    let quiz = service(EchoAnalyzer { fail: true });
    let mut session = quiz.new_session();
    quiz.generate(&mut session, GenerationRequest::new("Maths", 1).unwrap())
        .await
        .unwrap();
    quiz.regenerate(&mut session).await.unwrap();

    session.select_answer(0, 0).unwrap();
    assert_eq!(quiz.submit(&mut session).await.unwrap(), None);
    assert_eq!(session.phase(), SessionPhase::Submitted);
    assert!(session.result().unwrap().is_perfect());
}

#[tokio::test]
async fn incomplete_submit_is_rejected() {
    let quiz = service(EchoAnalyzer::default());
    let mut session = quiz.new_session();
    quiz.generate(&mut session, GenerationRequest::new("Art", 2).unwrap())
        .await
        .unwrap();
    quiz.regenerate(&mut session).await.unwrap();
    session.select_answer(0, 0).unwrap();

    let err = quiz.submit(&mut session).await.unwrap_err();
    assert_eq!(err, QuizError::Incomplete { answered: 1, total: 2 });
    assert_eq!(session.phase(), SessionPhase::Reviewing);
}

#[tokio::test]
async fn manual_tickets_drop_superseded_responses() {
    let quiz = service(EchoAnalyzer::default());
    let mut session = quiz.new_session();
    let request = GenerationRequest::new("Geography", 2).unwrap();

    let first = session.begin_generation(request).unwrap();
    let second = session.begin_regeneration().unwrap();

    // The first response fails (scripted), but it arrives after it was superseded.
    let first_outcome = quiz.fetch_questions(&first).await;
    let second_outcome = quiz.fetch_questions(&second).await;

    assert_eq!(
        session.complete_generation(&second, second_outcome),
        CompletionOutcome::Applied
    );
    assert_eq!(
        session.complete_generation(&first, first_outcome),
        CompletionOutcome::Stale
    );
    assert_eq!(session.phase(), SessionPhase::Reviewing);
    assert!(session.failure().is_none());
}
