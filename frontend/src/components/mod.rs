pub mod button;
pub mod card;
pub mod demo_form;
pub mod footer;
pub mod header;
pub mod modal;
