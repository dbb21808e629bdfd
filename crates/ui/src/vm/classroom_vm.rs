use chrono::NaiveDate;
use quiz_core::model::{
    AssignmentStatus, AssignmentSummary, ClassroomOverview, Discussion, StudentProgress,
};

use super::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentRowVm {
    pub id: String,
    pub title: String,
    pub due: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
    pub score: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub name: String,
    pub email: String,
    pub progress: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscussionRowVm {
    pub title: String,
    pub started_by: String,
    pub replies: String,
    pub last_activity: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassroomVm {
    pub course_id: String,
    pub title: String,
    pub subtitle: String,
    pub assignments: Vec<AssignmentRowVm>,
    pub students: Vec<StudentRowVm>,
    pub discussions: Vec<DiscussionRowVm>,
}

#[must_use]
pub fn map_classroom(overview: &ClassroomOverview) -> ClassroomVm {
    ClassroomVm {
        course_id: overview.course_id.clone(),
        title: overview.name.clone(),
        subtitle: format!("Instructor: {} \u{2022} {}", overview.instructor, overview.room),
        assignments: overview
            .assignments
            .iter()
            .map(|assignment| AssignmentRowVm {
                id: assignment.id.clone(),
                title: assignment.title.clone(),
                due: format!("Due: {}", format_date(assignment.due_date)),
                status_class: assignment.status.as_str(),
                status_label: assignment.status.label(),
                score: assignment.score.clone(),
            })
            .collect(),
        students: overview
            .students
            .iter()
            .map(|student| StudentRowVm {
                name: student.name.clone(),
                email: student.email.clone(),
                progress: format!("{}%", student.progress.min(100)),
            })
            .collect(),
        discussions: overview
            .discussions
            .iter()
            .map(|discussion| DiscussionRowVm {
                title: discussion.title.clone(),
                started_by: format!("Started by {}", discussion.author),
                replies: match discussion.replies {
                    1 => "1 reply".into(),
                    n => format!("{n} replies"),
                },
                last_activity: format!("Last activity: {}", discussion.last_activity),
            })
            .collect(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Classroom shown until course detail is served by the classroom backend.
#[must_use]
pub fn sample_classroom(course_id: &str) -> ClassroomOverview {
    ClassroomOverview {
        course_id: course_id.to_string(),
        name: "Advanced Mathematics".into(),
        instructor: "Dr. Sarah Johnson".into(),
        room: "Room 301".into(),
        assignments: vec![
            AssignmentSummary {
                id: "1".into(),
                title: "Linear Algebra Quiz".into(),
                due_date: date(2025, 3, 20),
                status: AssignmentStatus::Completed,
                score: Some("95/100".into()),
            },
            AssignmentSummary {
                id: "2".into(),
                title: "Vector Calculus Assignment".into(),
                due_date: date(2025, 3, 25),
                status: AssignmentStatus::InProgress,
                score: None,
            },
            AssignmentSummary {
                id: "3".into(),
                title: "Differential Equations Project".into(),
                due_date: date(2025, 4, 1),
                status: AssignmentStatus::Upcoming,
                score: None,
            },
        ],
        students: vec![
            StudentProgress {
                name: "Emma Thompson".into(),
                email: "emma.t@example.com".into(),
                progress: 85,
            },
            StudentProgress {
                name: "James Wilson".into(),
                email: "james.w@example.com".into(),
                progress: 92,
            },
            StudentProgress {
                name: "Sophie Chen".into(),
                email: "sophie.c@example.com".into(),
                progress: 78,
            },
        ],
        discussions: vec![
            Discussion {
                title: "Question about Vector Spaces".into(),
                author: "Emma Thompson".into(),
                replies: 5,
                last_activity: "2h ago".into(),
            },
            Discussion {
                title: "Help with Eigenvalues".into(),
                author: "James Wilson".into(),
                replies: 3,
                last_activity: "5h ago".into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_classroom_maps_rows() {
        let vm = map_classroom(&sample_classroom("c-42"));

        assert_eq!(vm.course_id, "c-42");
        assert_eq!(vm.subtitle, "Instructor: Dr. Sarah Johnson \u{2022} Room 301");
        assert_eq!(vm.assignments.len(), 3);
        assert_eq!(vm.assignments[0].due, "Due: 2025-03-20");
        assert_eq!(vm.assignments[0].score.as_deref(), Some("95/100"));
        assert_eq!(vm.assignments[1].status_class, "in-progress");
        assert_eq!(vm.students[1].progress, "92%");
        assert_eq!(vm.discussions[0].replies, "5 replies");
        assert_eq!(vm.discussions[1].started_by, "Started by James Wilson");
    }

    #[test]
    fn progress_is_capped_and_single_reply_is_singular() {
        let mut overview = sample_classroom("c-1");
        overview.students[0].progress = 140;
        overview.discussions[0].replies = 1;
        let vm = map_classroom(&overview);
        assert_eq!(vm.students[0].progress, "100%");
        assert_eq!(vm.discussions[0].replies, "1 reply");
    }
}
