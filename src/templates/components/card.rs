use crate::controller::viewmodel::CardVm;
use maud::{html, Markup};

/// One listing card. Action buttons carry the record id in `data-id`;
/// wiring clicks back to the controller is the host page's job.
pub fn card(vm: &CardVm) -> Markup {
    html! {
        div class="card" id=(format!("apartment-{}", vm.base_id)) {
            div class="card-photo" {
                @match &vm.image {
                    Some(src) => {
                        img src=(src) alt="Photo" loading="lazy" decoding="async";
                    }
                    None => {
                        div class="no-photo" { "No photo" }
                    }
                }
            }
            div class="card-body" {
                div class="card-info-row" {
                    div class="price-row" {
                        span class="card-price" { (vm.price) }
                        span class="card-comission-info" { (vm.commission_label) }
                    }
                    span class="card-address" { (vm.address) }
                    span class="card-city_distr" { (vm.city_distr) }
                }

                div class="card-meta-row" {
                    span class="card-meta-item" { (vm.rooms) " rooms" }
                    @if let Some(property_type) = &vm.property_type {
                        span class="card-meta-item" { (property_type) }
                    }
                    span class="card-meta-item" { (vm.area) }
                }

                div class="btn-row" {
                    a class="btn" href=(vm.map_url()) { "On map" }
                    button class="btn save-btn"
                        data-id=(vm.base_id)
                        data-saved=(if vm.saved { "true" } else { "false" })
                    { (vm.save_label) }
                    button class="btn contact-btn" data-id=(vm.base_id) { "Contact" }
                    button class="btn more-btn" data-id=(vm.base_id) {
                        (if vm.description_expanded { "Hide" } else { "More" })
                    }
                }

                div class="description-container" {
                    div class=(if vm.description_expanded {
                        "description-text expanded"
                    } else {
                        "description-text"
                    }) id=(format!("desc-{}", vm.base_id)) {
                        p class="card-text" { (vm.description) }
                    }
                }
            }
        }
    }
}
