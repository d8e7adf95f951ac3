pub mod project;
pub mod project_member;
pub mod user;
