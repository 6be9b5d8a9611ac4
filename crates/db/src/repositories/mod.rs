//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_repo;
pub mod project_repo;
pub mod question_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use project_repo::ProjectRepo;
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;
