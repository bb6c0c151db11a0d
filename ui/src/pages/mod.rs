//! Application pages

pub mod chatbot;
pub mod crop;
pub mod diseases;
pub mod landing;
