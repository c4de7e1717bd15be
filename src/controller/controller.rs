use crate::api::api_error::ApiError;
use crate::api::client::ListingApi;
use crate::api::models::{
    Category, InvoiceRequest, LinkRequest, ListingRecord, PageRequest, SaveAction, SaveRequest,
    SortDir, SortField,
};
use crate::controller::bridge::{HostBridge, PopupButton, PopupParams};
use crate::controller::state::PageState;
use crate::controller::viewmodel::CardVm;
use crate::templates;
use maud::Markup;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Rapid sort-control changes (field, then direction) coalesce into a
/// single request within this window.
pub const SORT_DEBOUNCE: Duration = Duration::from_millis(60);

const AD_REMOVED_MSG: &str = "The listing was removed";
const LINK_UNAVAILABLE_MSG: &str = "Link is unavailable";
const POPUP_TITLE: &str = "No subscription";
const POPUP_MESSAGE: &str = "To access contacts, please subscribe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSort {
    field: SortField,
    dir: SortDir,
    due: Instant,
}

/// Owns the listing page: request state, the current page of records, and
/// the save/contact/payment action handlers. One user action mutates state,
/// issues at most one HTTP request, and the page is re-rendered wholesale.
pub struct ListingPageController<A: ListingApi, B: HostBridge> {
    api: A,
    bridge: B,
    cat: Category,
    lang: String,
    state: PageState,
    records: Vec<ListingRecord>,
    /// Count captured from the page-1 response; later pages keep it.
    title_total: Option<u64>,
    /// True once at least one page response has arrived, so the empty
    /// placeholder is distinguishable from "not loaded yet".
    loaded_once: bool,
    expanded: HashSet<i64>,
    pending_sort: Option<PendingSort>,
    /// Target of the last 403-triggered popup. Single slot: a second 403
    /// before the user answers the first popup overwrites it
    /// (last-writer-wins). Known limitation, kept as observed.
    pending_invoice: Option<i64>,
}

impl<A: ListingApi, B: HostBridge> ListingPageController<A, B> {
    pub fn new(api: A, bridge: B, cat: Category, lang: impl Into<String>) -> Self {
        Self {
            api,
            bridge,
            cat,
            lang: lang.into(),
            state: PageState::new(),
            records: Vec::new(),
            title_total: None,
            loaded_once: false,
            expanded: HashSet::new(),
            pending_sort: None,
            pending_invoice: None,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn title_total(&self) -> Option<u64> {
        self.title_total
    }

    /// Initial load, page 1.
    pub fn start(&mut self) {
        self.load_page(1);
    }

    /// Pagination bar click. Out-of-range pages, the current page and
    /// clicks while a request is in flight are no-ops.
    pub fn on_page_click(&mut self, page: u32) {
        if !self.state.can_click(page) {
            return;
        }
        self.load_page(page);
    }

    /// Sort-control change. Not gated by `loading`; instead it (re)arms the
    /// debounce window and only the last pair scheduled within the window
    /// fires, via `tick`.
    pub fn on_sort_change(&mut self, field: SortField, dir: SortDir, now: Instant) {
        self.pending_sort = Some(PendingSort {
            field,
            dir,
            due: now + SORT_DEBOUNCE,
        });
    }

    /// Drives the debounce clock. Call with the current time; fires the
    /// pending sort request once its window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending_sort else {
            return;
        };
        if now < pending.due {
            return;
        }
        self.pending_sort = None;
        if self.state.loading {
            // Colliding with an in-flight request drops the sort without
            // touching state: the sort pair on record stays the one that
            // was actually fetched.
            log::debug!("Sort change dropped, another request is in flight");
            return;
        }
        self.state.apply_sort(pending.field, pending.dir);
        self.load_page(1);
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut PageState {
        &mut self.state
    }

    fn load_page(&mut self, page: u32) {
        if !self.state.begin_load() {
            log::debug!("Request for page {page} dropped, another one is in flight");
            return;
        }

        let req = PageRequest {
            page,
            cat: self.cat,
            lang: self.lang.clone(),
            sort_field: self.state.sort_field,
            sort_dir: self.state.sort_dir,
        };

        match self.api.fetch_page(&req) {
            Ok(response) => {
                if page == 1 {
                    self.title_total = Some(response.total);
                }
                self.records = response.results;
                self.expanded.clear();
                self.loaded_once = true;
                self.state.finish_load(page, response.total_page);
            }
            Err(e) => {
                // Previous cards stay on screen untouched. No retry.
                log::error!("Failed to load listings page {page}: {e}");
                self.state.fail_load();
            }
        }
    }

    /// Save/unsave button. The saved flag and button label only change
    /// after a 2xx; there is no optimistic update to roll back.
    pub fn toggle_save(&mut self, base_id: i64) {
        let Some(record) = self.records.iter().find(|r| r.base_id == base_id) else {
            return;
        };
        let action = if record.saved {
            SaveAction::Remove
        } else {
            SaveAction::Save
        };

        let req = SaveRequest {
            base_id,
            action,
            lang: self.lang.clone(),
            sort_field: self.state.sort_field,
            sort_dir: self.state.sort_dir,
        };

        match self.api.toggle_save(&req) {
            Ok(()) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.base_id == base_id) {
                    record.saved = !record.saved;
                }
            }
            Err(ApiError::AccessDenied) => self.show_payment_popup(base_id),
            Err(ApiError::Gone) => self.remove_card(base_id),
            Err(e) => log::error!("Error while saving listing {base_id}: {e}"),
        }
    }

    /// Contact button: asks the backend to reveal the contact link and
    /// hands it to the host link-opener.
    pub fn open_contact(&mut self, base_id: i64) {
        let req = LinkRequest {
            base_id,
            lang: self.lang.clone(),
            sort_field: self.state.sort_field,
            sort_dir: self.state.sort_dir,
        };

        match self.api.get_link(&req) {
            Ok(link) => match link.url {
                Some(url) => self.bridge.open_link(&url),
                None => self.bridge.show_alert(LINK_UNAVAILABLE_MSG),
            },
            Err(ApiError::AccessDenied) => self.show_payment_popup(base_id),
            Err(ApiError::Gone) => self.remove_card(base_id),
            Err(e) => log::error!("Contact request failed for listing {base_id}: {e}"),
        }
    }

    /// Map button: opens a maps search for the card's address.
    pub fn open_map(&self, base_id: i64) {
        let Some(record) = self.records.iter().find(|r| r.base_id == base_id) else {
            return;
        };
        let vm = CardVm::from_record(record);
        self.bridge.open_link(&vm.map_url());
    }

    /// "More"/"Hide" button. Purely local view state, reset on page load.
    pub fn toggle_description(&mut self, base_id: i64) {
        if !self.expanded.remove(&base_id) {
            self.expanded.insert(base_id);
        }
    }

    /// A 410 means the record is gone server-side: drop exactly that card
    /// from the current view, whatever action surfaced it.
    fn remove_card(&mut self, base_id: i64) {
        self.records.retain(|r| r.base_id != base_id);
        self.bridge.show_alert(AD_REMOVED_MSG);
    }

    fn show_payment_popup(&mut self, base_id: i64) {
        self.pending_invoice = Some(base_id);
        self.bridge.show_popup(&PopupParams {
            title: POPUP_TITLE.to_string(),
            message: POPUP_MESSAGE.to_string(),
            buttons: vec![
                PopupButton {
                    id: "pay",
                    kind: "default",
                    text: "Subscribe",
                },
                PopupButton {
                    id: "cancel",
                    kind: "destructive",
                    text: "Cancel",
                },
            ],
        });
    }

    /// The host's single global popup-closed event. `button_id` identifies
    /// the pressed button, not the popup that asked.
    pub fn on_popup_closed(&mut self, button_id: &str) {
        match button_id {
            "pay" => {
                let Some(base_id) = self.pending_invoice.take() else {
                    return;
                };
                let req = InvoiceRequest {
                    base_id,
                    lang: self.lang.clone(),
                    sort_field: self.state.sort_field,
                    sort_dir: self.state.sort_dir,
                };
                match self.api.trigger_invoice(&req) {
                    Ok(()) => {
                        log::info!("Payment triggered, closing the Mini-App");
                        self.bridge.close();
                    }
                    Err(ApiError::Transport(e)) => {
                        // The request never reached the backend; stay open.
                        log::error!("Failed to trigger payment: {e}");
                    }
                    Err(e) => {
                        // The backend answered, even if with an error status.
                        // Any completed exchange closes the view.
                        log::error!("Payment trigger answered with an error: {e}");
                        self.bridge.close();
                    }
                }
            }
            "cancel" => {
                self.pending_invoice = None;
                log::info!("User canceled payment");
            }
            other => log::debug!("Ignoring popup button {other}"),
        }
    }

    pub fn card_vms(&self) -> Vec<CardVm> {
        self.records
            .iter()
            .map(|record| {
                let mut vm = CardVm::from_record(record);
                vm.description_expanded = self.expanded.contains(&record.base_id);
                vm
            })
            .collect()
    }

    /// Full re-render of the listing page from the current state.
    pub fn render(&self) -> Markup {
        templates::pages::listing_page(
            self.cat,
            self.title_total,
            &self.card_vms(),
            self.loaded_once,
            self.state.current_page,
            self.state.total_pages,
        )
    }
}
