use maud::{html, Markup};

/// Rendered instead of cards when a page comes back with no results.
pub fn empty_state() -> Markup {
    html! {
        div class="text-center empty-state" { "Nothing found" }
    }
}
