pub mod add;
pub mod delete;
pub mod export;
pub mod list;
