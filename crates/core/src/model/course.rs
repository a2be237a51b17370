use serde::{Deserialize, Serialize};
use std::fmt;

use super::area::InterestArea;

/// Course opened from the dashboard's recommended track. It has no catalog entry.
pub const RECOMMENDED_COURSE_ID: &str = "curso-intro";

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn recommended() -> Self {
        Self::new(RECOMMENDED_COURSE_ID)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseId({})", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
    area: InterestArea,
    duration: String,
}

impl Course {
    #[must_use]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        area: InterestArea,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            area,
            duration: duration.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn area(&self) -> InterestArea {
        self.area
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    Area(InterestArea),
}

impl CatalogFilter {
    /// Areas offered by the catalog picker, in picker order.
    pub const AREAS: [InterestArea; 4] = [
        InterestArea::ArtificialIntelligence,
        InterestArea::Sustainability,
        InterestArea::Management,
        InterestArea::SoftSkills,
    ];

    #[must_use]
    pub fn options() -> Vec<CatalogFilter> {
        std::iter::once(CatalogFilter::All)
            .chain(Self::AREAS.into_iter().map(CatalogFilter::Area))
            .collect()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::Area(area) => area.label(),
        }
    }

    /// Inverse of [`CatalogFilter::label`] over [`CatalogFilter::options`]. Anything
    /// else falls back to `All`.
    #[must_use]
    pub fn from_label(value: &str) -> Self {
        Self::options()
            .into_iter()
            .find(|option| option.label() == value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn matches(self, course: &Course) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Area(area) => course.area() == area,
        }
    }
}

/// Static list of available courses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Course::new(
                CourseId::new("c1"),
                "IA para iniciantes",
                InterestArea::ArtificialIntelligence,
                "2h",
            ),
            Course::new(
                CourseId::new("c2"),
                "Gestão Ágil",
                InterestArea::Management,
                "3h",
            ),
            Course::new(
                CourseId::new("c3"),
                "Sustentabilidade Prática",
                InterestArea::Sustainability,
                "1.5h",
            ),
            Course::new(
                CourseId::new("c4"),
                "Comunicação e Feedback",
                InterestArea::SoftSkills,
                "1h",
            ),
        ])
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses matching `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: CatalogFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }
}
