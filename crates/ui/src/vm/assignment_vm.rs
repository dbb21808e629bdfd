use chrono::NaiveDate;
use quiz_core::model::{AssignmentComment, AssignmentDetail, ProblemStatus};

use super::time_fmt::format_long_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentVm {
    pub initials: String,
    pub author: String,
    pub posted: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentVm {
    pub title: String,
    pub due: String,
    pub time_limit: String,
    pub instructions: String,
    pub steps: Vec<String>,
    pub progress_style: String,
    pub progress_line: String,
    pub problems: Vec<ProblemRowVm>,
    pub comments: Vec<CommentVm>,
    pub class_average: String,
    pub your_score: String,
}

#[must_use]
pub fn map_assignment(detail: &AssignmentDetail) -> AssignmentVm {
    AssignmentVm {
        title: detail.title.clone(),
        due: format!("Due: {}", format_long_date(detail.due_date)),
        time_limit: format!("Time: {} minutes", detail.time_limit_minutes),
        instructions: detail.instructions.clone(),
        steps: detail.steps.clone(),
        progress_style: format!("width: {}%", detail.progress_percent()),
        progress_line: format!(
            "{} of {} problems completed",
            detail.completed_problems(),
            detail.problems.len()
        ),
        problems: detail
            .problems
            .iter()
            .map(|problem| ProblemRowVm {
                text: format!(
                    "{} {}",
                    problem.label,
                    if problem.completed { "completed" } else { "pending" }
                ),
                completed: problem.completed,
            })
            .collect(),
        comments: detail
            .comments
            .iter()
            .map(|comment| CommentVm {
                initials: initials(&comment.author),
                author: comment.author.clone(),
                posted: comment.posted.clone(),
                body: comment.body.clone(),
            })
            .collect(),
        class_average: format!("{}%", detail.class_average),
        your_score: detail
            .your_score
            .map_or_else(|| "Not graded".into(), |score| format!("{score}%")),
    }
}

/// Two-letter avatar text; titles such as "Dr." are skipped.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Assignment shown until assignment detail is served by the classroom backend.
#[must_use]
pub fn sample_assignment(id: &str) -> AssignmentDetail {
    AssignmentDetail {
        id: id.to_string(),
        title: "Vector Calculus Quiz".into(),
        due_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap_or_default(),
        time_limit_minutes: 60,
        instructions: "Complete the following problems related to vector calculus. Show all your work and explain your reasoning for each step.".into(),
        steps: vec![
            "Calculate the gradient of the scalar field f(x,y,z)".into(),
            "Find the divergence of the vector field F(x,y,z)".into(),
            "Evaluate the line integral along the given curve".into(),
        ],
        problems: (1..=3)
            .map(|n| ProblemStatus {
                label: format!("Problem {n}"),
                completed: n < 3,
            })
            .collect(),
        comments: vec![AssignmentComment {
            author: "Dr. Sarah Johnson".into(),
            posted: "2 hours ago".into(),
            body: "Remember to show all steps clearly in your solution.".into(),
        }],
        class_average: 85,
        your_score: Some(92),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_assignment_maps_progress_and_status() {
        let vm = map_assignment(&sample_assignment("2"));

        assert_eq!(vm.due, "Due: March 25, 2025");
        assert_eq!(vm.time_limit, "Time: 60 minutes");
        assert_eq!(vm.steps.len(), 3);
        assert_eq!(vm.progress_line, "2 of 3 problems completed");
        assert_eq!(vm.progress_style, "width: 67%");
        assert_eq!(vm.problems[0].text, "Problem 1 completed");
        assert_eq!(vm.problems[2].text, "Problem 3 pending");
        assert!(!vm.problems[2].completed);
        assert_eq!(vm.comments[0].initials, "SJ");
        assert_eq!(vm.your_score, "92%");
    }

    #[test]
    fn ungraded_assignment_says_so() {
        let mut detail = sample_assignment("3");
        detail.your_score = None;
        assert_eq!(map_assignment(&detail).your_score, "Not graded");
    }
}
