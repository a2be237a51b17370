mod about;
mod catalog;
mod course_detail;
mod dashboard;
mod loading;
mod login;
mod profile;
mod progress;
mod root;
mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use catalog::CatalogView;
pub use course_detail::CourseDetailView;
pub use dashboard::DashboardView;
pub use loading::LoadingView;
pub use login::LoginView;
pub use profile::ProfileView;
pub use progress::{ProgressBar, ProgressView};
pub use root::ScreenRoot;
pub use shell::ShellView;
pub use state::{UiState, ViewError};
