//! Application layer for SkillHub.
//!
//! Coordinates the backend seams from `skillhub-core` into the profile page:
//! view-model state, the load/add synchronization flow, and sign-out.

pub mod navigation;
pub mod notification_channel;
pub mod page_state;
pub mod profile_page;
pub mod session_usecase;
pub mod skill_sync;
pub mod view_model;

mod in_flight;

pub use notification_channel::ChannelNotifier;
pub use page_state::PageState;
pub use profile_page::{AddSkillOutcome, ProfilePage};
pub use session_usecase::SessionUseCase;
pub use skill_sync::SkillSync;
pub use view_model::ProfileViewModel;
