//! Page footer component

use maud::{Markup, html};

/// Renders the footer shown at the bottom of every generated page.
pub fn footer() -> Markup {
    html! {
        footer {
            p { "Generated by inkpost" }
        }
    }
}
