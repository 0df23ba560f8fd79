//! Rendering and stitching capability clients for Beatreel.
//!
//! Two families of drivers implement the capability traits from
//! `beatreel_interface`:
//!
//! - **HTTP** clients talking JSON to a render service and a stitch service.
//!   Enabled with the `http` feature (on by default).
//! - **Placeholder** drivers that answer instantly with deterministic
//!   `placeholder://` references, for dry runs and offline development.
//!
//! ```no_run
//! # #[cfg(feature = "http")]
//! # {
//! use beatreel_core::EndpointConfig;
//! use beatreel_models::HttpRenderClient;
//!
//! let client = HttpRenderClient::from_config(&EndpointConfig::default());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod drivers;
mod placeholder;

#[cfg(feature = "http")]
mod http;

pub use drivers::{CapabilityDrivers, placeholder_drivers};
pub use placeholder::{PLACEHOLDER_SCHEME, PlaceholderRenderDriver, PlaceholderStitchDriver};

#[cfg(feature = "http")]
pub use drivers::http_drivers;

#[cfg(feature = "http")]
pub use http::{HttpRenderClient, HttpStitchClient, RenderResponse, StitchRequest, StitchResponse};
