use crate::templates::layouts::miniapp::miniapp_layout;
use maud::{html, Markup};

/// Invoice redirect screen. It only ever shows a single status line while
/// the flow runs ("creating", "opening", or the failure message).
pub fn invoice_page(status: &str) -> Markup {
    miniapp_layout(
        "Payment",
        html! {
            main class="container" {
                p id="msg" { (status) }
            }
        },
    )
}
