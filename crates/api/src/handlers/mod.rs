pub mod favorite;
pub mod moderation;
pub mod project;
pub mod question;
