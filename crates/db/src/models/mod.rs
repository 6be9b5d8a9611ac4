//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates, one per permission tier
//!   where the tiers may set different fields

pub mod favorite;
pub mod project;
pub mod question;
pub mod user;
