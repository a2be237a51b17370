use skillup_core::model::User;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub value: u8,
    /// Bar fill, always within 0..=100.
    pub width_pct: u8,
    pub label: String,
}

#[must_use]
pub fn map_progress(user: Option<&User>) -> ProgressVm {
    let value = user.map_or(0, |u| u.progress().value());
    ProgressVm {
        value,
        width_pct: value.min(100),
        label: format!("{value}% complete"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileVm {
    pub username: String,
    pub area: String,
    pub progress: String,
}

#[must_use]
pub fn map_profile(user: Option<&User>) -> ProfileVm {
    ProfileVm {
        username: user.map(|u| u.username().to_string()).unwrap_or_default(),
        area: user.map_or_else(|| "—".to_string(), |u| u.area().to_string()),
        progress: format!("{}%", user.map_or(0, |u| u.progress().value())),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerHeaderVm {
    pub title: String,
    pub subtitle: String,
}

#[must_use]
pub fn map_drawer_header(user: Option<&User>) -> DrawerHeaderVm {
    match user {
        Some(user) => DrawerHeaderVm {
            title: user.username().to_string(),
            subtitle: user.area().to_string(),
        },
        None => DrawerHeaderVm {
            title: "Visitor".to_string(),
            subtitle: "No preference".to_string(),
        },
    }
}
