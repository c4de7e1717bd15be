use serde::{Deserialize, Serialize};

/// Listing filter context the page was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Listing,
    LastWeek,
    Saved,
}

impl Category {
    /// Parses the `cat` query value, falling back to the default filter.
    pub fn parse(s: &str) -> Category {
        match s.to_lowercase().as_str() {
            "last_week" => Category::LastWeek,
            "saved" => Category::Saved,
            _ => Category::Listing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Date,
    Price,
    Area,
    Rooms,
    Id,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveAction {
    Save,
    Remove,
}

/// Body of `POST /apartments`.
#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub cat: Category,
    pub lang: String,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
}

/// Body of `POST /toggle_save`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveRequest {
    pub base_id: i64,
    pub action: SaveAction,
    pub lang: String,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
}

/// Body of `POST /get_link`.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRequest {
    pub base_id: i64,
    pub lang: String,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
}

/// Body of `POST /trigger_invoice`. Carries the listing that triggered the
/// upsell plus the sort/filter context the user was browsing with.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceRequest {
    pub base_id: i64,
    pub lang: String,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
}

/// One listing as the backend sends it. Every field tolerates absence so a
/// sparse record still renders with placeholders instead of failing the page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ListingRecord {
    pub base_id: i64,
    pub price: Option<f64>,
    pub address: String,
    pub city_distr: String,
    pub rooms: Option<i64>,
    pub area: Option<f64>,
    pub property_type: Option<String>,
    pub no_comission: bool,
    pub images: Vec<String>,
    pub description: String,
    pub saved: bool,
}

/// `POST /apartments` response before per-record decoding.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListingPageWire {
    pub total: u64,
    pub total_page: u32,
    pub results: Vec<serde_json::Value>,
}

impl Default for ListingPageWire {
    fn default() -> Self {
        Self {
            total: 0,
            total_page: 1,
            results: Vec::new(),
        }
    }
}

/// One page of listings, fully decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub total: u64,
    pub total_page: u32,
    pub results: Vec<ListingRecord>,
}

impl ListingPage {
    /// Decodes records one by one. A malformed record must not take its
    /// siblings down with it, so it degrades to a default record instead.
    pub fn from_wire(wire: ListingPageWire) -> ListingPage {
        let results = wire
            .results
            .into_iter()
            .map(|value| match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Malformed listing record, rendering defaults: {e}");
                    ListingRecord::default()
                }
            })
            .collect();

        ListingPage {
            total: wire.total,
            total_page: wire.total_page.max(1),
            results,
        }
    }
}

/// `POST /get_link` response. A missing `url` on a 2xx is the distinct
/// "link unavailable" condition, not an error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinkResponse {
    pub url: Option<String>,
}

/// `POST /invoices/create` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InvoiceResponse {
    #[serde(rename = "redirectUri")]
    pub redirect_uri: Option<String>,
}

/// `GET /listings/count` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountResponse {
    pub total: u64,
}
