use crate::api::models::Category;
use crate::controller::viewmodel::CardVm;
use crate::templates::components::{card, empty_state, pagination_bar};
use crate::templates::layouts::miniapp::miniapp_layout;
use maud::{html, Markup};

fn title_text(cat: Category) -> &'static str {
    match cat {
        Category::LastWeek => "properties added in the last week",
        Category::Saved => "saved properties",
        Category::Listing => "properties without commission found by your filters",
    }
}

/// The listing screen: title with the page-1 count, the card container,
/// and the pagination bar. Always rendered wholesale, never patched.
pub fn listing_page(
    cat: Category,
    total: Option<u64>,
    cards: &[CardVm],
    loaded_once: bool,
    current_page: u32,
    total_pages: u32,
) -> Markup {
    miniapp_layout(
        "Listings",
        html! {
            h1 id="total-title" {
                (title_text(cat))
                @if let Some(total) = total {
                    ": " span id="total-count" class="highlight-total" { (total) }
                }
            }

            div id="apartments" {
                @if cards.is_empty() {
                    @if loaded_once {
                        (empty_state())
                    }
                } @else {
                    @for vm in cards {
                        (card(vm))
                    }
                }
            }

            (pagination_bar(current_page, total_pages))
        },
    )
}
