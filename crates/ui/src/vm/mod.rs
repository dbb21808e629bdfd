mod assignment_vm;
mod classroom_vm;
mod course_vm;
mod feedback_vm;
mod quiz_vm;
mod time_fmt;

pub use assignment_vm::{
    AssignmentVm, CommentVm, ProblemRowVm, map_assignment, sample_assignment,
};
pub use classroom_vm::{
    AssignmentRowVm, ClassroomVm, DiscussionRowVm, StudentRowVm, map_classroom, sample_classroom,
};
pub use course_vm::{CourseCardVm, map_course_cards};
pub use feedback_vm::{FeedbackVm, MetricVm, map_feedback, sample_feedback_report};
pub use quiz_vm::{
    AnalysisCardVm, FormError, OptionState, OptionVm, QuestionRowVm, QuizVm, WrongAnswerVm,
    parse_generation_form,
};
