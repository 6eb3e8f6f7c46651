//! Page sections and shared widgets

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod loading;
pub mod navbar;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use loading::{LoadingOverlay, LoadingSpinner, PostSkeleton};
pub use navbar::Navbar;
