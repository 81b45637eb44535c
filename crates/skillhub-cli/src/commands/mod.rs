pub mod auth;
pub mod configure;
pub mod profile;
pub mod route;
