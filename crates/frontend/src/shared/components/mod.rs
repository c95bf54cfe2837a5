pub mod confirm_modal;
pub mod loading;
pub mod page_header;
pub mod pagination_controls;
pub mod ui;
