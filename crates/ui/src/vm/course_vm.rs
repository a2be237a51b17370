use skillup_core::model::{Course, CourseId};
use skillup_core::navigation::CourseDetailParams;

pub const COURSE_DESCRIPTION: &str = "A short demo course. It shows how learning tracks are \
structured and how your progress is tracked as you complete modules.";

const TITLE_PLACEHOLDER: &str = "Course";
const AREA_PLACEHOLDER: &str = "Area";
const DURATION_PLACEHOLDER: &str = "—";

/// Catalog list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub params: CourseDetailParams,
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| CourseCardVm {
            id: course.id().to_string(),
            title: course.title().to_owned(),
            subtitle: format!("{} • {}", course.area(), course.duration()),
            params: CourseDetailParams::for_course(course),
        })
        .collect()
}

/// Course detail screen content. Missing payloads fall back to placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub course_id: String,
    pub title: String,
    pub area: String,
    pub duration: String,
}

#[must_use]
pub fn map_course_detail(params: &CourseDetailParams) -> CourseDetailVm {
    let course = params.course.as_ref();
    CourseDetailVm {
        course_id: params.course_id.to_string(),
        title: course.map_or(TITLE_PLACEHOLDER, Course::title).to_owned(),
        area: course.map_or_else(|| AREA_PLACEHOLDER.to_owned(), |c| c.area().to_string()),
        duration: course.map_or(DURATION_PLACEHOLDER, Course::duration).to_owned(),
    }
}

/// Parameters for the dashboard's recommended course, which has no payload.
#[must_use]
pub fn recommended_course_params() -> CourseDetailParams {
    CourseDetailParams::new(CourseId::recommended())
}
