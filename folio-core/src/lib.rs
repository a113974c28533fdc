//! Behavior layer for the portfolio page: navigation menu, scroll-spy,
//! scroll-to-top, theme toggle, skills "See More/Less" and resume printing.
//!
//! Everything is written against [`Dom`] and [`PreferenceStore`]; `folio-web`
//! supplies the browser implementations.

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod storage;
#[cfg(all(any(test, feature = "test-utils"), not(target_arch = "wasm32")))]
pub mod test_helpers;
mod time;

pub use behaviors::{install, Behaviors};
pub use config::{load_page_config, CONFIG_ELEMENT_ID};
pub use dom::{Dom, DomEvent, Handler};
pub use storage::{PreferenceStore, StorageError};
