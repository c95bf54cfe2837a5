pub mod cascade;
pub mod list;
