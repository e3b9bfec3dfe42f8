pub mod about;
pub mod response;
