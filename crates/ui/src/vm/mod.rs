mod course_vm;
mod login_vm;
mod user_vm;

pub use course_vm::{
    COURSE_DESCRIPTION, CourseCardVm, CourseDetailVm, map_course_cards, map_course_detail,
    recommended_course_params,
};
pub use login_vm::{LoginForm, continue_label, submit_login};
pub use user_vm::{DrawerHeaderVm, ProfileVm, ProgressVm, map_drawer_header, map_profile, map_progress};
