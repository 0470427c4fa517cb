pub mod demo_form;
pub mod modal;
pub mod showcase;
