mod area;
mod course;
mod credentials;
mod progress;
mod user;

pub use area::InterestArea;
pub use course::{Catalog, CatalogFilter, Course, CourseId, RECOMMENDED_COURSE_ID};
pub use credentials::{CredentialsError, MIN_PASSWORD_LEN, SignInDraft};
pub use progress::Progress;
pub use user::{Preferences, User, UserError, UserPatch, Username};
