//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the post and index pages.

pub mod footer;
pub mod layout;
