use crate::api::models::ListingRecord;

const PLACEHOLDER: &str = "—";

/// Everything the card template needs, derived from one record. Pure data,
/// no markup, so the mapping is testable on its own. Missing record fields
/// degrade to placeholders instead of failing the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardVm {
    pub base_id: i64,
    pub price: String,
    pub address: String,
    pub city_distr: String,
    pub rooms: String,
    pub area: String,
    pub property_type: Option<String>,
    pub commission_label: &'static str,
    pub image: Option<String>,
    pub description: String,
    pub saved: bool,
    pub save_label: &'static str,
    pub map_query: String,
    pub description_expanded: bool,
}

impl CardVm {
    pub fn from_record(record: &ListingRecord) -> CardVm {
        let map_query = [record.city_distr.as_str(), record.address.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        CardVm {
            base_id: record.base_id,
            price: record.price.map(fmt_number).unwrap_or_else(placeholder),
            address: or_placeholder(&record.address),
            city_distr: or_placeholder(&record.city_distr),
            rooms: record
                .rooms
                .map(|n| n.to_string())
                .unwrap_or_else(placeholder),
            area: record
                .area
                .map(|a| format!("{} m²", fmt_number(a)))
                .unwrap_or_else(placeholder),
            property_type: record.property_type.clone().filter(|t| !t.is_empty()),
            commission_label: if record.no_comission {
                "no commission"
            } else {
                "commission"
            },
            image: record.images.iter().find(|i| !i.is_empty()).cloned(),
            description: record.description.clone(),
            saved: record.saved,
            save_label: if record.saved { "Remove" } else { "Save" },
            map_query,
            description_expanded: false,
        }
    }

    /// Google Maps search link for the card's map button.
    pub fn map_url(&self) -> String {
        let mut url = url::Url::parse("https://www.google.com/maps/search/")
            .expect("static URL is valid");
        url.query_pairs_mut()
            .append_pair("api", "1")
            .append_pair("query", &self.map_query);
        url.to_string()
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn or_placeholder(s: &str) -> String {
    if s.is_empty() {
        placeholder()
    } else {
        s.to_string()
    }
}

/// Renders whole numbers without the trailing `.0` the backend's floats
/// would otherwise carry into the card.
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
