//! Navigation surface consumed by the router.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named destinations. No path or query parameters exist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Route {
    #[strum(serialize = "/login")]
    Login,
    #[strum(serialize = "/register")]
    Register,
    #[strum(serialize = "/forgot-password")]
    ForgotPassword,
    #[strum(serialize = "/profile")]
    Profile,
    #[strum(serialize = "/")]
    Root,
}

impl Route {
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Parses a path. Unknown paths return `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        path.parse().ok()
    }

    /// Follows redirects: `/` lands on `/profile`.
    pub fn resolve(self) -> Self {
        match self {
            Route::Root => Route::Profile,
            other => other,
        }
    }

    /// Routes rendered inside the signed-in layout.
    pub fn requires_session(self) -> bool {
        matches!(self, Route::Profile | Route::Root)
    }
}

/// Receives navigation requests.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_path_roundtrip_for_every_route() {
        for route in Route::iter() {
            assert_eq!(route.to_string(), route.path());
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_root_redirects_to_profile() {
        assert_eq!(Route::from_path("/").map(Route::resolve), Some(Route::Profile));
        assert_eq!(Route::Login.resolve(), Route::Login);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path("/profile?tab=skills"), None);
    }

    #[test]
    fn test_layout_routes() {
        assert!(Route::Profile.requires_session());
        assert!(!Route::ForgotPassword.requires_session());
    }
}
