mod assignment;
mod classroom;
mod dashboard;
mod feedback;
mod home;
mod quiz;
mod sign_in;
mod sign_up;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assignment::AssignmentView;
pub use classroom::ClassroomView;
pub use dashboard::DashboardView;
pub use feedback::FeedbackView;
pub use home::HomeView;
pub use quiz::{QuizIntent, QuizView};
pub use sign_in::SignInView;
pub use sign_up::SignUpView;
pub use state::{ViewError, ViewState, view_state_from_resource};
