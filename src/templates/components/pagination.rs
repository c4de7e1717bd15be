use crate::controller::pagination::{window, PageItem};
use maud::{html, Markup};

/// Pagination bar for the listing page. Buttons carry their target page in
/// `data-page`, same contract as the cards' `data-id`.
pub fn pagination_bar(current: u32, total: u32) -> Markup {
    let items = window(current, total);

    html! {
        div id="pagination" {
            @for item in &items {
                @match item {
                    PageItem::Prev { target, enabled } => {
                        button class="page-btn" data-page=(target) disabled[!enabled] { "‹" }
                    }
                    PageItem::Page { number, active } => {
                        button class=(if *active { "page-btn active" } else { "page-btn" })
                            data-page=(number) { (number) }
                    }
                    PageItem::Ellipsis => {
                        span class="ellipsis" { "…" }
                    }
                    PageItem::Next { target, enabled } => {
                        button class="page-btn" data-page=(target) disabled[!enabled] { "›" }
                    }
                }
            }
        }
    }
}
