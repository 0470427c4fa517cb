pub mod comparison;
pub mod landing;
pub mod showcase;
