mod app;
mod config;
mod context;
mod decor;
mod effects;
mod error;
mod form;
mod hero;
mod nav;
mod raf;
mod selectors;
mod stage;

pub(crate) mod js;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use crate::{app::FashionPage, config::PageConfig, error::Error};
