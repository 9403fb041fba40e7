//! Filter toolbar components

pub mod button;
pub mod filter_select;
pub mod pagination;
pub mod search_input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use filter_select::FilterSelect;
pub use pagination::{page_count, Pagination};
pub use search_input::SearchInput;
