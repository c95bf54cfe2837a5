pub mod badge;
pub mod select;
