//! HTTP page fetching.

pub mod client;

pub use client::{page_url, PageClient, PageSource};
