pub mod about;
pub mod api;
pub mod landing;
