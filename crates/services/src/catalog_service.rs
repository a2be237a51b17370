use skillup_core::model::{Catalog, CatalogFilter, Course, InterestArea};

/// Read-only access to the course catalog.
#[derive(Clone, Debug)]
pub struct CatalogService {
    catalog: Catalog,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn list(&self, filter: CatalogFilter) -> Vec<Course> {
        self.catalog.filtered(filter).into_iter().cloned().collect()
    }

    /// Title of the track recommended on the dashboard for `area`.
    #[must_use]
    pub fn recommended_track_title(&self, area: InterestArea) -> String {
        format!("Introdução à {area}")
    }
}
