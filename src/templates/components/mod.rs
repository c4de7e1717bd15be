pub mod card;
pub mod empty_state;
pub mod pagination;

pub use card::card;
pub use empty_state::empty_state;
pub use pagination::pagination_bar;
