//! Hooks

pub mod use_filter;

pub use use_filter::{use_filter, UseFilter};
