//! Domain logic for the project directory service.
//!
//! This crate has no I/O: it defines the shared types, the validation rules,
//! the question-answer merge algorithm, search filter normalization, slug
//! derivation, and the moderation tri-state. The `db` and `api` crates build
//! on these primitives.

pub mod error;
pub mod moderation;
pub mod questions;
pub mod search;
pub mod slug;
pub mod tiers;
pub mod types;
pub mod validation;
