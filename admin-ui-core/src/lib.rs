//! Host-independent behaviors for the server-rendered admin pages.
//!
//! Every behavior is written against the narrow capabilities in [`host`]
//! (DOM lookup and mutation, deferred callbacks, navigation, icon
//! replacement, chart construction, JSON fetching). The `admin-ui-web`
//! crate implements those capabilities over `web-sys`; the tests in this
//! crate use the fakes in `testing`.
//!
//! # Behaviors
//!
//! - [`dictionary`]: brand dropdown that navigates to the filtered model list
//! - [`bootstrap`]: page-load icon replacement and flash-message dismissal
//! - [`flash`]: the flash-message timers themselves
//! - [`modal`]: `openModal` / `closeModal`
//! - [`statistics`]: appointments line chart fed from the stats endpoint
//!
//! # Usage
//!
//! ```rust,ignore
//! let config = AdminUiConfig::default();
//! dictionary::init(&dom, navigator, &config);
//! bootstrap::init_page(&dom, &scheduler, &icons, &config);
//! statistics::load(&dom, &source, &charts, &config).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod flash;
pub mod host;
pub mod modal;
pub mod statistics;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AdminUiConfig;
pub use error::LoadError;
