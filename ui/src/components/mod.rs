//! Reusable UI components

pub mod chat_input;
pub mod footer;
pub mod loading;
pub mod navbar;
pub mod select_field;

pub use chat_input::ChatInput;
pub use footer::Footer;
pub use loading::{LoadingDots, LoadingSpinner};
pub use navbar::Navbar;
pub use select_field::SelectField;
