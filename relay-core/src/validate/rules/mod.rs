pub(crate) mod auth;
pub(crate) mod integration;
pub(crate) mod request;
