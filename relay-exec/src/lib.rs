#![forbid(unsafe_code)]

//! Runtime engine for executing HTTP integrations.
//!
//! This crate only runs integrations; document parsing/validation lives in
//! `relay-core` and persistence behind the traits in `relay-store`.

pub mod executor;
pub mod retry;

pub use crate::executor::Executor;
