use quiz_core::model::Course;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub name: String,
    pub section: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            section: course
                .section
                .clone()
                .filter(|section| !section.trim().is_empty())
                .unwrap_or_else(|| "No section".into()),
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}
