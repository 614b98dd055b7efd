// src/core/mod.rs

pub mod error;
pub mod html;
pub mod net;
pub mod sanitize;

pub use error::FetchError;
pub use net::{HttpSource, PageSource, StaticPage};
