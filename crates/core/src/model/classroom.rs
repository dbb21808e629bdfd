use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl AssignmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Upcoming => "upcoming",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// One row of a classroom's assignment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    /// Only present once graded, e.g. "95/100".
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProgress {
    pub name: String,
    pub email: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discussion {
    pub title: String,
    pub author: String,
    pub replies: u32,
    pub last_activity: String,
}

/// Detail page of one course: assignments, roster and discussions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomOverview {
    pub course_id: String,
    pub name: String,
    pub instructor: String,
    pub room: String,
    pub assignments: Vec<AssignmentSummary>,
    pub students: Vec<StudentProgress>,
    pub discussions: Vec<Discussion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemStatus {
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentComment {
    pub author: String,
    pub posted: String,
    pub body: String,
}

/// Everything the assignment page shows for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDetail {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub time_limit_minutes: u32,
    pub instructions: String,
    pub steps: Vec<String>,
    pub problems: Vec<ProblemStatus>,
    pub comments: Vec<AssignmentComment>,
    pub class_average: u8,
    pub your_score: Option<u8>,
}

impl AssignmentDetail {
    #[must_use]
    pub fn completed_problems(&self) -> usize {
        self.problems.iter().filter(|problem| problem.completed).count()
    }

    /// Share of completed problems, rounded to a whole percent.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.problems.len();
        if total == 0 {
            return 0;
        }
        let percent = (self.completed_problems() * 200 + total) / (total * 2);
        u8::try_from(percent).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(done: &[bool]) -> AssignmentDetail {
        AssignmentDetail {
            id: "a-1".into(),
            title: "Quiz".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
            time_limit_minutes: 60,
            instructions: String::new(),
            steps: Vec::new(),
            problems: done
                .iter()
                .enumerate()
                .map(|(i, completed)| ProblemStatus {
                    label: format!("Problem {}", i + 1),
                    completed: *completed,
                })
                .collect(),
            comments: Vec::new(),
            class_average: 85,
            your_score: None,
        }
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        let two_of_three = detail(&[true, true, false]);
        assert_eq!(two_of_three.completed_problems(), 2);
        assert_eq!(two_of_three.progress_percent(), 67);
        assert_eq!(detail(&[true, false, false]).progress_percent(), 33);
        assert_eq!(detail(&[true, true]).progress_percent(), 100);
    }

    #[test]
    fn no_problems_means_no_progress() {
        assert_eq!(detail(&[]).progress_percent(), 0);
    }

    #[test]
    fn status_strings() {
        assert_eq!(AssignmentStatus::InProgress.as_str(), "in-progress");
        assert_eq!(AssignmentStatus::Upcoming.label(), "Upcoming");
    }
}
