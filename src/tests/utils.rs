use crate::api::api_error::ApiError;
use crate::api::client::ListingApi;
use crate::api::models::{
    InvoiceRequest, LinkRequest, LinkResponse, ListingPage, ListingRecord, PageRequest,
    SaveRequest,
};
use crate::controller::bridge::{HostBridge, PopupParams};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Scripted stand-in for the backend. Responses are queued per operation;
/// an empty queue falls back to a benign default. Every request is
/// recorded for inspection.
#[derive(Default)]
pub struct FakeApi {
    pub page_responses: RefCell<VecDeque<Result<ListingPage, ApiError>>>,
    pub save_responses: RefCell<VecDeque<Result<(), ApiError>>>,
    pub link_responses: RefCell<VecDeque<Result<LinkResponse, ApiError>>>,
    pub invoice_responses: RefCell<VecDeque<Result<(), ApiError>>>,

    pub page_requests: RefCell<Vec<PageRequest>>,
    pub save_requests: RefCell<Vec<SaveRequest>>,
    pub link_requests: RefCell<Vec<LinkRequest>>,
    pub invoice_requests: RefCell<Vec<InvoiceRequest>>,
}

impl FakeApi {
    pub fn new() -> FakeApi {
        FakeApi::default()
    }

    pub fn queue_page(&self, response: Result<ListingPage, ApiError>) {
        self.page_responses.borrow_mut().push_back(response);
    }

    pub fn queue_save(&self, response: Result<(), ApiError>) {
        self.save_responses.borrow_mut().push_back(response);
    }

    pub fn queue_link(&self, response: Result<LinkResponse, ApiError>) {
        self.link_responses.borrow_mut().push_back(response);
    }

    pub fn queue_invoice(&self, response: Result<(), ApiError>) {
        self.invoice_responses.borrow_mut().push_back(response);
    }
}

impl ListingApi for FakeApi {
    fn fetch_page(&self, req: &PageRequest) -> Result<ListingPage, ApiError> {
        self.page_requests.borrow_mut().push(req.clone());
        self.page_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(page(0, 1, vec![])))
    }

    fn toggle_save(&self, req: &SaveRequest) -> Result<(), ApiError> {
        self.save_requests.borrow_mut().push(req.clone());
        self.save_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    fn get_link(&self, req: &LinkRequest) -> Result<LinkResponse, ApiError> {
        self.link_requests.borrow_mut().push(req.clone());
        self.link_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(LinkResponse::default()))
    }

    fn trigger_invoice(&self, req: &InvoiceRequest) -> Result<(), ApiError> {
        self.invoice_requests.borrow_mut().push(req.clone());
        self.invoice_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// Records everything the controller hands to the host.
#[derive(Default)]
pub struct FakeBridge {
    pub opened_links: RefCell<Vec<String>>,
    pub popups: RefCell<Vec<PopupParams>>,
    pub alerts: RefCell<Vec<String>>,
    pub closed: Cell<u32>,
}

impl FakeBridge {
    pub fn new() -> FakeBridge {
        FakeBridge::default()
    }
}

impl HostBridge for FakeBridge {
    fn open_link(&self, url: &str) {
        self.opened_links.borrow_mut().push(url.to_string());
    }

    fn show_popup(&self, popup: &PopupParams) {
        self.popups.borrow_mut().push(popup.clone());
    }

    fn show_alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn close(&self) {
        self.closed.set(self.closed.get() + 1);
    }
}

/// A record with every field present, ids and saved flag as given.
pub fn record(base_id: i64, saved: bool) -> ListingRecord {
    ListingRecord {
        base_id,
        price: Some(1200.0),
        address: format!("Main Street {base_id}"),
        city_distr: "Warsaw, Mokotów".to_string(),
        rooms: Some(2),
        area: Some(48.0),
        property_type: Some("apartment".to_string()),
        no_comission: true,
        images: vec![format!("https://img.example/{base_id}.jpg")],
        description: "Bright two-room flat".to_string(),
        saved,
    }
}

pub fn page(total: u64, total_page: u32, results: Vec<ListingRecord>) -> ListingPage {
    ListingPage {
        total,
        total_page,
        results,
    }
}
