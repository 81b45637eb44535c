//! Seams to the hosted backend.
//!
//! The backend is a black box with two faces: an authentication service that
//! knows the current identity, and a row store addressed by collection name
//! plus equality filters and an ordering. Concrete adapters live in the
//! infrastructure crate.

mod auth;
mod codec;
mod row_store;

pub use auth::{AuthService, Identity};
pub use codec::{decode_row, decode_rows, encode_row};
pub use row_store::{Collection, Filter, OrderBy, Row, RowStore, SortDirection};
