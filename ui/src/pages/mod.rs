//! Top-level pages

pub mod directory;
pub mod home;
pub mod legal;
