pub mod browser;
pub mod mailto;
