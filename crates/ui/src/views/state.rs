use dioxus::prelude::*;
use services::{SessionError, SessionManager, SessionSnapshot};
use skillup_core::model::CredentialsError;
use skillup_core::navigation::{NavPhase, Navigator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    MissingFields,
    PasswordTooShort { min: usize },
    NoSession,
    Persistence,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_session(err: &SessionError) -> Self {
        match err {
            SessionError::Validation(CredentialsError::MissingFields) => ViewError::MissingFields,
            SessionError::Validation(CredentialsError::PasswordTooShort { min }) => {
                ViewError::PasswordTooShort { min: *min }
            }
            SessionError::NoSession => ViewError::NoSession,
            SessionError::Persistence(_) | SessionError::Encoding(_) => ViewError::Persistence,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            ViewError::MissingFields => "Fill in username and password.".to_string(),
            ViewError::PasswordTooShort { min } => {
                format!("Password too short (minimum {min} characters).")
            }
            ViewError::NoSession => "You are not signed in.".to_string(),
            ViewError::Persistence => "Could not save your data. Please try again.".to_string(),
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Reactive mirror of the session plus the navigation state machine.
///
/// Views read both signals; only session-manager results and navigation events write them.
#[derive(Clone, Copy)]
pub struct UiState {
    pub session: Signal<SessionSnapshot>,
    pub nav: Signal<Navigator>,
}

impl UiState {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(snapshot: SessionSnapshot, nav: Navigator) -> Self {
        Self {
            session: Signal::new(snapshot),
            nav: Signal::new(nav),
        }
    }

    /// Apply a snapshot published by the session manager.
    pub fn observe(self, snapshot: SessionSnapshot) {
        let mut nav = self.nav;
        let mut session = self.session;
        {
            let mut nav = nav.write();
            if nav.phase() == NavPhase::Booting {
                if !snapshot.loading {
                    let _ = nav.hydrated(snapshot.user.as_ref());
                }
            } else {
                nav.sync_session(snapshot.user.as_ref());
            }
        }
        session.set(snapshot);
    }

    /// Enter the shell after the login screen signed in.
    pub fn signed_in(self, manager: &SessionManager) {
        self.observe(manager.snapshot());
        let mut nav = self.nav;
        let _ = nav.write().signed_in();
    }

    /// Return to login after a successful sign-out.
    pub fn signed_out(self, manager: &SessionManager) {
        self.observe(manager.snapshot());
        let mut nav = self.nav;
        let _ = nav.write().signed_out();
    }

    /// Pick up a committed user update without waiting for the subscription.
    pub fn refresh(self, manager: &SessionManager) {
        self.observe(manager.snapshot());
    }
}
