pub mod invoice;
pub mod listing;
pub mod result;

pub use invoice::invoice_page;
pub use listing::listing_page;
pub use result::result_page;
