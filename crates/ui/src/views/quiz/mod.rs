mod components;
mod view;

pub use view::{QuizIntent, QuizView};

#[cfg(test)]
pub(crate) use view::QuizTestHandles;
