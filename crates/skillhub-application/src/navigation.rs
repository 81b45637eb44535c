//! Route resolution with the signed-in guard.

use skillhub_core::navigation::Route;

/// Maps a requested path to the route that should actually render.
///
/// `/` redirects to `/profile`; signed-in routes send signed-out visitors to
/// `/login`. Unknown paths resolve to `None`.
pub fn resolve_path(path: &str, signed_in: bool) -> Option<Route> {
    let route = Route::from_path(path)?;
    if route.requires_session() && !signed_in {
        return Some(Route::Login);
    }
    Some(route.resolve())
}
