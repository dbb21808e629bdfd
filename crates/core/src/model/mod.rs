mod account;
mod analysis;
mod answers;
mod classroom;
mod draft;
mod feedback;
mod phase;
mod question;
mod request;

pub use account::{Course, Role};
pub use analysis::{Analysis, WrongAnswer};
pub use answers::AnswerSet;
pub use classroom::{
    AssignmentComment, AssignmentDetail, AssignmentStatus, AssignmentSummary, ClassroomOverview,
    Discussion, ProblemStatus, StudentProgress,
};
pub use draft::QuestionDraft;
pub use feedback::{FeedbackMetric, FeedbackReport};
pub use phase::SessionPhase;
pub use question::{Question, QuestionError, UNMATCHED_INDEX};
pub use request::{GenerationRequest, MAX_QUESTION_COUNT, RequestError};
