use services::SessionManager;
use skillup_core::model::{InterestArea, Preferences, User, UserPatch, Username};

use crate::views::ViewError;

/// Values typed on the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub area: InterestArea,
}

impl LoginForm {
    fn has_empty_fields(&self) -> bool {
        self.username.trim().is_empty() || self.password.is_empty()
    }
}

/// Sign in, then apply the chosen area.
///
/// Empty fields are reported without calling the session manager.
///
/// # Errors
///
/// Returns the `ViewError` to show inline when validation or persistence fails.
pub async fn submit_login(session: &SessionManager, form: &LoginForm) -> Result<User, ViewError> {
    if form.has_empty_fields() {
        return Err(ViewError::MissingFields);
    }

    session
        .sign_in(&form.username, &form.password)
        .await
        .map_err(|err| ViewError::from_session(&err))?;

    session
        .update_user(UserPatch::new().with_preferences(Preferences::with_area(form.area)))
        .await
        .map_err(|err| ViewError::from_session(&err))
}

#[must_use]
pub fn continue_label(username: &Username) -> String {
    format!("Continue as {username}")
}
