//! Page generation modules for different view types
//!
//! Each page module builds the markup of one page type from shared
//! components.

pub mod index;
pub mod post;
