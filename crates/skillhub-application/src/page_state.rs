//! Page-level lifecycle.

/// Where the profile page is in its lifecycle.
///
/// ```text
/// Unauthenticated -> Loading -> Ready
/// Ready -> Ready            (every add-skill attempt)
/// Ready -> Unauthenticated  (sign-out)
/// ```
///
/// There is no error state: failures leave the page `Ready` with stale data
/// and a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Unauthenticated,
    Loading,
    Ready,
}

impl PageState {
    /// Whether the page may move from `self` to `next`.
    pub fn can_transition_to(self, next: PageState) -> bool {
        use PageState::*;
        matches!(
            (self, next),
            (Unauthenticated, Loading)
                | (Unauthenticated, Unauthenticated)
                | (Loading, Ready)
                | (Loading, Unauthenticated)
                | (Ready, Ready)
                | (Ready, Loading)
                | (Ready, Unauthenticated)
        )
    }

    pub fn is_ready(self) -> bool {
        self == PageState::Ready
    }
}
