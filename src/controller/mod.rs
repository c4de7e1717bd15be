pub mod bridge;
pub mod controller;
pub mod pagination;
pub mod state;
pub mod viewmodel;

pub use bridge::{HostBridge, PopupButton, PopupParams};
pub use controller::ListingPageController;
pub use pagination::{window, PageItem};
pub use state::PageState;
pub use viewmodel::CardVm;
