use crate::api::api_error::ApiError;
use crate::api::models::{
    CountResponse, InvoiceRequest, InvoiceResponse, LinkRequest, LinkResponse, ListingPage,
    ListingPageWire, PageRequest, SaveRequest,
};
use reqwest::blocking::{Client, Response};
use serde::Serialize;

/// Host-issued identity token header. The value is opaque and passed
/// through untouched; it is never parsed or modified client-side.
const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// The listing operations the controller needs. Kept behind a trait so the
/// controller can be driven by a scripted double in tests.
pub trait ListingApi {
    fn fetch_page(&self, req: &PageRequest) -> Result<ListingPage, ApiError>;
    fn toggle_save(&self, req: &SaveRequest) -> Result<(), ApiError>;
    fn get_link(&self, req: &LinkRequest) -> Result<LinkResponse, ApiError>;
    fn trigger_invoice(&self, req: &InvoiceRequest) -> Result<(), ApiError>;
}

impl<T: ListingApi> ListingApi for &T {
    fn fetch_page(&self, req: &PageRequest) -> Result<ListingPage, ApiError> {
        (**self).fetch_page(req)
    }

    fn toggle_save(&self, req: &SaveRequest) -> Result<(), ApiError> {
        (**self).toggle_save(req)
    }

    fn get_link(&self, req: &LinkRequest) -> Result<LinkResponse, ApiError> {
        (**self).get_link(req)
    }

    fn trigger_invoice(&self, req: &InvoiceRequest) -> Result<(), ApiError> {
        (**self).trigger_invoice(req)
    }
}

pub struct BackendClient {
    client: Client,
    base_url: url::Url,
    init_data: String,
}

impl BackendClient {
    /// `base_url` is the API prefix, e.g. `https://example.com/api/`.
    /// No client-side timeout: requests are bounded only by the platform's
    /// own network timeout.
    pub fn new(base_url: &str, init_data: impl Into<String>) -> Result<Self, ApiError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = url::Url::parse(&base)
            .map_err(|e| ApiError::Transport(format!("Invalid base URL: {e}")))?;

        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            init_data: init_data.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("Invalid endpoint {path}: {e}")))
    }

    fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let resp = self
            .client
            .post(self.endpoint(path)?)
            .header(INIT_DATA_HEADER, &self.init_data)
            .json(body)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp)
    }

    /// `POST /invoices/create` for the standalone invoice page. The page's
    /// query parameters are forwarded verbatim as a JSON object.
    pub fn create_invoice(
        &self,
        params: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<InvoiceResponse, ApiError> {
        let resp = self.post_json("invoices/create", params)?;
        resp.json().map_err(|e| ApiError::BadShape(e.to_string()))
    }

    /// `GET /listings/count` for the result page.
    pub fn listing_count(&self) -> Result<CountResponse, ApiError> {
        let resp = self
            .client
            .get(self.endpoint("listings/count")?)
            .header(INIT_DATA_HEADER, &self.init_data)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = check_status(resp)?;
        resp.json().map_err(|e| ApiError::BadShape(e.to_string()))
    }
}

impl ListingApi for BackendClient {
    fn fetch_page(&self, req: &PageRequest) -> Result<ListingPage, ApiError> {
        let resp = self.post_json("apartments", req)?;
        let wire: ListingPageWire = resp.json().map_err(|e| ApiError::BadShape(e.to_string()))?;
        Ok(ListingPage::from_wire(wire))
    }

    fn toggle_save(&self, req: &SaveRequest) -> Result<(), ApiError> {
        // Success body carries no information the client uses.
        self.post_json("toggle_save", req)?;
        Ok(())
    }

    fn get_link(&self, req: &LinkRequest) -> Result<LinkResponse, ApiError> {
        let resp = self.post_json("get_link", req)?;
        resp.json().map_err(|e| ApiError::BadShape(e.to_string()))
    }

    fn trigger_invoice(&self, req: &InvoiceRequest) -> Result<(), ApiError> {
        self.post_json("trigger_invoice", req)?;
        Ok(())
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    match resp.status().as_u16() {
        200..=299 => Ok(resp),
        403 => Err(ApiError::AccessDenied),
        410 => Err(ApiError::Gone),
        status => Err(ApiError::Http(status)),
    }
}
