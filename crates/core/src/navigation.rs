//! Screen reachability gated by session presence.
//!
//! Navigation is a three-level hierarchy: a root stack (login, the authenticated shell and
//! course detail), a drawer inside the shell (home, profile, about) and tabs inside the
//! drawer's home entry (dashboard, catalog, progress).
//!
//! Crossing the authentication boundary in either direction always resets the root stack,
//! so back-navigation can never return to the login screen from the shell or into the shell
//! after signing out.

use thiserror::Error;

use crate::model::{Course, CourseId, User, Username};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    /// The persisted session has not been read yet.
    Booting,
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Catalog,
    Progress,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerEntry {
    /// Hosts the tabs.
    #[default]
    Home,
    Profile,
    About,
}

/// Places reachable by plain navigation inside the authenticated shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Catalog,
    Progress,
    Profile,
    About,
}

/// The screen currently presented to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Loading,
    Login,
    Dashboard,
    Catalog,
    Progress,
    Profile,
    About,
    CourseDetail,
}

impl From<Destination> for Screen {
    fn from(value: Destination) -> Self {
        match value {
            Destination::Dashboard => Screen::Dashboard,
            Destination::Catalog => Screen::Catalog,
            Destination::Progress => Screen::Progress,
            Destination::Profile => Screen::Profile,
            Destination::About => Screen::About,
        }
    }
}

/// Parameters for the course detail screen. The course payload is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailParams {
    pub course_id: CourseId,
    pub course: Option<Course>,
}

impl CourseDetailParams {
    #[must_use]
    pub fn new(course_id: CourseId) -> Self {
        Self {
            course_id,
            course: None,
        }
    }

    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        Self {
            course_id: course.id().clone(),
            course: Some(course.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootRoute {
    Login,
    Shell,
    CourseDetail {
        params: CourseDetailParams,
        origin: Destination,
    },
}

/// Drawer and tab selection inside the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    drawer: DrawerEntry,
    tab: Tab,
}

impl ShellState {
    #[must_use]
    pub fn drawer(&self) -> DrawerEntry {
        self.drawer
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        match self.drawer {
            DrawerEntry::Home => match self.tab {
                Tab::Dashboard => Destination::Dashboard,
                Tab::Catalog => Destination::Catalog,
                Tab::Progress => Destination::Progress,
            },
            DrawerEntry::Profile => Destination::Profile,
            DrawerEntry::About => Destination::About,
        }
    }

    fn focus(&mut self, destination: Destination) {
        match destination {
            Destination::Dashboard => self.show_tab(Tab::Dashboard),
            Destination::Catalog => self.show_tab(Tab::Catalog),
            Destination::Progress => self.show_tab(Tab::Progress),
            // The tab selection survives while another drawer entry is open.
            Destination::Profile => self.drawer = DrawerEntry::Profile,
            Destination::About => self.drawer = DrawerEntry::About,
        }
    }

    fn show_tab(&mut self, tab: Tab) {
        self.drawer = DrawerEntry::Home;
        self.tab = tab;
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("session is still loading")]
    StillBooting,
    #[error("session has already been loaded")]
    AlreadyHydrated,
    #[error("there is no saved session to continue")]
    NoSavedSession,
    #[error("this screen requires a signed-in user")]
    NotAuthenticated,
    #[error("course detail cannot be opened from {0:?}")]
    CourseDetailUnreachable(Screen),
}

/// Navigation state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    phase: NavPhase,
    stack: Vec<RootRoute>,
    shell: ShellState,
    saved_session: Option<Username>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: NavPhase::Booting,
            stack: Vec::new(),
            shell: ShellState::default(),
            saved_session: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    #[must_use]
    pub fn history(&self) -> &[RootRoute] {
        &self.stack
    }

    #[must_use]
    pub fn shell(&self) -> ShellState {
        self.shell
    }

    /// Username of a persisted session the login screen may offer to continue.
    #[must_use]
    pub fn saved_session(&self) -> Option<&Username> {
        self.saved_session.as_ref()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.stack.last() {
            None => Screen::Loading,
            Some(RootRoute::Login) => Screen::Login,
            Some(RootRoute::Shell) => self.shell.destination().into(),
            Some(RootRoute::CourseDetail { .. }) => Screen::CourseDetail,
        }
    }

    /// Parameters of the course detail screen, when it is on top.
    #[must_use]
    pub fn course_detail(&self) -> Option<&CourseDetailParams> {
        match self.stack.last() {
            Some(RootRoute::CourseDetail { params, .. }) => Some(params),
            _ => None,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Leave `Booting` once the persisted session has been read.
    ///
    /// A restored user is not resumed automatically: the login screen is shown and the
    /// user is offered as a saved session (see [`Navigator::continue_saved_session`]).
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::AlreadyHydrated` if called more than once.
    pub fn hydrated(&mut self, user: Option<&User>) -> Result<(), NavigationError> {
        if self.phase != NavPhase::Booting {
            return Err(NavigationError::AlreadyHydrated);
        }
        self.reset_to_login();
        self.saved_session = user.map(|u| u.username().clone());
        Ok(())
    }

    /// Explicitly resume the saved session offered on the login screen.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NoSavedSession` if nothing is on offer, or
    /// `NavigationError::StillBooting` before hydration.
    pub fn continue_saved_session(&mut self) -> Result<(), NavigationError> {
        match self.phase {
            NavPhase::Booting => Err(NavigationError::StillBooting),
            NavPhase::Unauthenticated if self.saved_session.is_some() => {
                self.reset_to_shell();
                Ok(())
            }
            _ => Err(NavigationError::NoSavedSession),
        }
    }

    /// Enter the shell after a successful sign-in.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::StillBooting` before hydration.
    pub fn signed_in(&mut self) -> Result<(), NavigationError> {
        if self.phase == NavPhase::Booting {
            return Err(NavigationError::StillBooting);
        }
        self.reset_to_shell();
        Ok(())
    }

    /// Return to the login screen after sign-out.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::StillBooting` before hydration.
    pub fn signed_out(&mut self) -> Result<(), NavigationError> {
        if self.phase == NavPhase::Booting {
            return Err(NavigationError::StillBooting);
        }
        self.reset_to_login();
        Ok(())
    }

    /// React to a session change published by the session manager.
    ///
    /// Losing the user while authenticated sends the app back to login; while
    /// unauthenticated the saved-session offer tracks the current user.
    pub fn sync_session(&mut self, user: Option<&User>) {
        match (self.phase, user) {
            (NavPhase::Booting, _) => {}
            (NavPhase::Authenticated, None) => self.reset_to_login(),
            (NavPhase::Authenticated, Some(_)) => {}
            (NavPhase::Unauthenticated, user) => {
                self.saved_session = user.map(|u| u.username().clone());
            }
        }
    }

    /// Show a shell destination, closing any course detail on top.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NotAuthenticated` outside the shell.
    pub fn navigate(&mut self, destination: Destination) -> Result<(), NavigationError> {
        self.ensure_authenticated()?;
        self.stack.truncate(1);
        self.shell.focus(destination);
        Ok(())
    }

    /// Push the course detail screen.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NotAuthenticated` outside the shell, or
    /// `NavigationError::CourseDetailUnreachable` unless the dashboard or catalog is showing.
    pub fn open_course(&mut self, params: CourseDetailParams) -> Result<(), NavigationError> {
        self.ensure_authenticated()?;
        let origin = match self.screen() {
            Screen::Dashboard => Destination::Dashboard,
            Screen::Catalog => Destination::Catalog,
            other => return Err(NavigationError::CourseDetailUnreachable(other)),
        };
        self.stack.push(RootRoute::CourseDetail { params, origin });
        Ok(())
    }

    /// Pop the top route. Returns `false` when already at a root.
    ///
    /// Leaving a course detail refocuses the shell on the screen it was opened from.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        if let Some(RootRoute::CourseDetail { origin, .. }) = self.stack.pop() {
            self.shell.focus(origin);
        }
        true
    }

    fn ensure_authenticated(&self) -> Result<(), NavigationError> {
        match self.phase {
            NavPhase::Authenticated => Ok(()),
            NavPhase::Booting => Err(NavigationError::StillBooting),
            NavPhase::Unauthenticated => Err(NavigationError::NotAuthenticated),
        }
    }

    fn reset_to_login(&mut self) {
        self.phase = NavPhase::Unauthenticated;
        self.stack = vec![RootRoute::Login];
        self.shell = ShellState::default();
        self.saved_session = None;
    }

    fn reset_to_shell(&mut self) {
        self.phase = NavPhase::Authenticated;
        self.stack = vec![RootRoute::Shell];
        self.shell = ShellState::default();
        self.saved_session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, InterestArea, Username};

    fn ana() -> User {
        User::new(Username::parse("ana").unwrap())
    }

    fn signed_in() -> Navigator {
        let mut nav = Navigator::new();
        nav.hydrated(None).unwrap();
        nav.signed_in().unwrap();
        nav
    }

    #[test]
    fn boots_into_loading() {
        let nav = Navigator::new();
        assert_eq!(nav.phase(), NavPhase::Booting);
        assert_eq!(nav.screen(), Screen::Loading);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn hydration_without_user_shows_login() {
        let mut nav = Navigator::new();
        nav.hydrated(None).unwrap();
        assert_eq!(nav.phase(), NavPhase::Unauthenticated);
        assert_eq!(nav.screen(), Screen::Login);
        assert!(nav.saved_session().is_none());
        assert_eq!(nav.hydrated(None), Err(NavigationError::AlreadyHydrated));
    }

    #[test]
    fn saved_user_requires_confirmation() {
        let mut nav = Navigator::new();
        nav.hydrated(Some(&ana())).unwrap();
        assert_eq!(nav.phase(), NavPhase::Unauthenticated);
        assert_eq!(nav.saved_session().map(Username::as_str), Some("ana"));

        nav.continue_saved_session().unwrap();
        assert_eq!(nav.phase(), NavPhase::Authenticated);
        assert_eq!(nav.screen(), Screen::Dashboard);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn continue_without_saved_user_fails() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.continue_saved_session(),
            Err(NavigationError::StillBooting)
        );
        nav.hydrated(None).unwrap();
        assert_eq!(
            nav.continue_saved_session(),
            Err(NavigationError::NoSavedSession)
        );
    }

    #[test]
    fn sign_in_and_out_reset_history_both_ways() {
        let mut nav = signed_in();
        assert_eq!(nav.history(), [RootRoute::Shell]);
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Dashboard);

        nav.navigate(Destination::Catalog).unwrap();
        nav.open_course(CourseDetailParams::new(CourseId::new("c1")))
            .unwrap();
        nav.signed_out().unwrap();

        assert_eq!(nav.phase(), NavPhase::Unauthenticated);
        assert_eq!(nav.history(), [RootRoute::Login]);
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Login);
    }

    #[test]
    fn shell_is_unreachable_while_unauthenticated() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.navigate(Destination::Profile),
            Err(NavigationError::StillBooting)
        );
        nav.hydrated(None).unwrap();
        assert_eq!(
            nav.navigate(Destination::Profile),
            Err(NavigationError::NotAuthenticated)
        );
        assert_eq!(
            nav.open_course(CourseDetailParams::new(CourseId::recommended())),
            Err(NavigationError::NotAuthenticated)
        );
    }

    #[test]
    fn free_navigation_between_shell_destinations() {
        let mut nav = signed_in();
        for destination in [
            Destination::Catalog,
            Destination::Profile,
            Destination::Progress,
            Destination::About,
            Destination::Dashboard,
        ] {
            nav.navigate(destination).unwrap();
            assert_eq!(nav.screen(), Screen::from(destination));
            assert!(!nav.can_go_back());
        }
    }

    #[test]
    fn course_detail_returns_to_catalog() {
        let mut nav = signed_in();
        nav.navigate(Destination::Catalog).unwrap();
        let catalog = Catalog::builtin();
        let course = catalog.get(&CourseId::new("c2")).unwrap();
        nav.open_course(CourseDetailParams::for_course(course))
            .unwrap();

        assert_eq!(nav.screen(), Screen::CourseDetail);
        let params = nav.course_detail().unwrap();
        assert_eq!(params.course_id.as_str(), "c2");
        assert_eq!(
            params.course.as_ref().map(Course::area),
            Some(InterestArea::Management)
        );

        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Catalog);
        assert!(!nav.back());
    }

    #[test]
    fn back_refocuses_the_origin_screen() {
        let mut nav = signed_in();
        nav.navigate(Destination::Catalog).unwrap();
        nav.open_course(CourseDetailParams::new(CourseId::new("c1")))
            .unwrap();
        nav.shell.focus(Destination::Progress);

        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Catalog);
        assert_eq!(nav.shell().tab(), Tab::Catalog);
    }

    #[test]
    fn course_detail_returns_to_dashboard() {
        let mut nav = signed_in();
        nav.open_course(CourseDetailParams::new(CourseId::recommended()))
            .unwrap();
        assert!(nav.course_detail().unwrap().course.is_none());
        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Dashboard);
    }

    #[test]
    fn course_detail_only_from_dashboard_or_catalog() {
        let mut nav = signed_in();
        nav.navigate(Destination::Profile).unwrap();
        assert_eq!(
            nav.open_course(CourseDetailParams::new(CourseId::new("c1"))),
            Err(NavigationError::CourseDetailUnreachable(Screen::Profile))
        );

        nav.navigate(Destination::Dashboard).unwrap();
        nav.open_course(CourseDetailParams::new(CourseId::new("c1")))
            .unwrap();
        assert_eq!(
            nav.open_course(CourseDetailParams::new(CourseId::new("c2"))),
            Err(NavigationError::CourseDetailUnreachable(Screen::CourseDetail))
        );
    }

    #[test]
    fn navigating_from_course_detail_closes_it() {
        let mut nav = signed_in();
        nav.open_course(CourseDetailParams::new(CourseId::recommended()))
            .unwrap();
        nav.navigate(Destination::Progress).unwrap();
        assert_eq!(nav.screen(), Screen::Progress);
        assert_eq!(nav.history(), [RootRoute::Shell]);
    }

    #[test]
    fn tab_selection_survives_drawer_entries() {
        let mut nav = signed_in();
        nav.navigate(Destination::Progress).unwrap();
        nav.navigate(Destination::About).unwrap();
        assert_eq!(nav.shell().drawer(), DrawerEntry::About);
        assert_eq!(nav.shell().tab(), Tab::Progress);
    }

    #[test]
    fn losing_the_session_returns_to_login() {
        let mut nav = signed_in();
        nav.sync_session(Some(&ana()));
        assert_eq!(nav.phase(), NavPhase::Authenticated);

        nav.sync_session(None);
        assert_eq!(nav.phase(), NavPhase::Unauthenticated);
        assert_eq!(nav.history(), [RootRoute::Login]);
    }

    #[test]
    fn saved_offer_tracks_session_while_on_login() {
        let mut nav = Navigator::new();
        nav.sync_session(Some(&ana()));
        assert_eq!(nav.phase(), NavPhase::Booting);

        nav.hydrated(None).unwrap();
        nav.sync_session(Some(&ana()));
        assert!(nav.saved_session().is_some());
        nav.sync_session(None);
        assert!(nav.saved_session().is_none());
    }
}
