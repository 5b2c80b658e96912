//! Top navigation for AyurWellness.
//!
//! Routing itself belongs to whatever hosts the app; this crate only needs a
//! [`Router`] that reports the current path and can be asked to move.
//!
//! ```
//! use ayurwell_navigation::{MemoryRouter, Navigation};
//!
//! let nav = Navigation::new(MemoryRouter::new("/register"));
//! assert!(nav.is_active("/register"));
//!
//! nav.activate("/herbs");
//! let active: Vec<_> = nav.items().into_iter().filter(|i| i.active).collect();
//! assert_eq!(active[0].link.label, "Herbs");
//! ```

use ayurwell_log::debug;
use parking_lot::RwLock;
use serde::Serialize;

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Brand link back to the landing page.
pub const HOME_LINK: NavLink = NavLink {
    path: "/",
    label: "AyurWellness",
};

/// Link shown under the registration form for existing users.
pub const SIGN_IN_LINK: NavLink = NavLink {
    path: "/login",
    label: "Sign in here",
};

/// Links in the top bar, left to right.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        path: "/register",
        label: "Register",
    },
    NavLink {
        path: "/quiz",
        label: "Prakriti Quiz",
    },
    NavLink {
        path: "/symptoms",
        label: "Symptoms",
    },
    NavLink {
        path: "/herbs",
        label: "Herbs",
    },
    NavLink {
        path: "/marks",
        label: "Marks",
    },
];

/// The host application's router.
pub trait Router: Send + Sync {
    /// Path currently displayed, e.g. `/register`.
    fn current_path(&self) -> String;

    /// Move to another path.
    fn navigate(&self, path: &str);
}

/// In-process router holding the current path.
#[derive(Debug, Default)]
pub struct MemoryRouter {
    path: RwLock<String>,
}

impl MemoryRouter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: RwLock::new(path.into()),
        }
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.read().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.write() = path.to_string();
    }
}

/// A link with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub link: NavLink,
    pub active: bool,
}

/// Navigation bar state over an injected router.
#[derive(Debug)]
pub struct Navigation<R: Router> {
    router: R,
}

impl<R: Router> Navigation<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Exact match against the router's current path.
    pub fn is_active(&self, path: &str) -> bool {
        self.router.current_path() == path
    }

    /// Every top-bar link with its active flag.
    pub fn items(&self) -> Vec<NavItem> {
        let current = self.router.current_path();
        NAV_LINKS
            .iter()
            .map(|link| NavItem {
                link: *link,
                active: link.path == current,
            })
            .collect()
    }

    /// Follow a link.
    pub fn activate(&self, path: &str) {
        debug!("navigating to {}", path);
        self.router.navigate(path);
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_path_is_active() {
        let nav = Navigation::new(MemoryRouter::new("/quiz"));
        assert!(nav.is_active("/quiz"));
        assert!(!nav.is_active("/quiz/1"));
        assert!(!nav.is_active("/"));
    }

    #[test]
    fn test_items_mark_single_active_link() {
        let nav = Navigation::new(MemoryRouter::new("/symptoms"));
        let items = nav.items();

        assert_eq!(items.len(), NAV_LINKS.len());
        let active: Vec<_> = items.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].link.label, "Symptoms");
    }

    #[test]
    fn test_home_highlights_nothing() {
        let nav = Navigation::new(MemoryRouter::new(HOME_LINK.path));
        assert!(nav.items().iter().all(|item| !item.active));
    }

    #[test]
    fn test_activate_moves_router() {
        let nav = Navigation::new(MemoryRouter::default());
        nav.activate(SIGN_IN_LINK.path);
        assert_eq!(nav.router().current_path(), "/login");
    }

    #[test]
    fn test_items_serialize() {
        let nav = Navigation::new(MemoryRouter::new("/marks"));
        let json = serde_json::to_value(nav.items()).unwrap();
        assert_eq!(json[4]["link"]["path"], "/marks");
        assert_eq!(json[4]["active"], true);
    }
}
