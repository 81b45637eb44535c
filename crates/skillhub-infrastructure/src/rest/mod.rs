//! REST adapters for the hosted backend.
//!
//! Rows are served in the PostgREST dialect under `/rest/v1`, authentication
//! in the GoTrue dialect under `/auth/v1`. Both adapters share one
//! [`RestClient`] and one [`SessionHandle`], so a sign-in through the auth
//! adapter is immediately visible to the row store.

mod auth;
mod client;
mod row_store;
#[cfg(test)]
mod test_server;

pub use auth::RestAuthService;
pub use client::{RestClient, SessionHandle};
pub use row_store::RestRowStore;
