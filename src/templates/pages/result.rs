use crate::templates::layouts::miniapp::miniapp_layout;
use maud::{html, Markup};

/// Result-count screen: how many listings the backend currently holds for
/// the search the page was opened with.
pub fn result_page(search_id: Option<&str>, total: u64) -> Markup {
    miniapp_layout(
        "Search results",
        html! {
            main class="container" {
                p { "Search " span id="searchId" { (search_id.unwrap_or("—")) } }
                p { "Total listings: " strong id="total" { (total) } }
            }
        },
    )
}
