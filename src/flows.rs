//! The two standalone Mini-App screens next to the listing browser: the
//! invoice redirect page and the result-count page.

use crate::api::api_error::ApiError;
use crate::api::client::BackendClient;
use crate::api::models::InvoiceResponse;
use crate::controller::bridge::HostBridge;

pub const INVOICE_FAILED_MSG: &str = "Failed to create invoice. Please try again later.";

/// Turns the invoice page's query string into the JSON object forwarded to
/// `POST /invoices/create`. The backend interprets the fields
/// (`subscribe_type`, `invoice_type`, ...); the client does not.
pub fn query_to_payload(query: &str) -> serde_json::Map<String, serde_json::Value> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), serde_json::Value::String(v.into_owned())))
        .collect()
}

/// A 2xx without a usable `redirectUri` is a data-shape failure with its
/// own user-facing message, not a generic one.
pub fn extract_redirect(response: InvoiceResponse) -> Result<String, ApiError> {
    response
        .redirect_uri
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| ApiError::BadShape("redirectUri missing".to_string()))
}

/// Invoice page flow: forward the query parameters, open the returned
/// payment URL through the host, then close the Mini-App.
pub fn run_invoice_page<B: HostBridge>(
    client: &BackendClient,
    query: &str,
    bridge: &B,
) -> Result<String, ApiError> {
    let payload = query_to_payload(query);
    let redirect_uri = extract_redirect(client.create_invoice(&payload)?)?;

    bridge.open_link(&redirect_uri);
    bridge.close();
    Ok(redirect_uri)
}

/// Result page flow: the backend's total listing count.
pub fn fetch_result_count(client: &BackendClient) -> Result<u64, ApiError> {
    Ok(client.listing_count()?.total)
}
