//! Driver selection.

use crate::{PlaceholderRenderDriver, PlaceholderStitchDriver};
use beatreel_interface::{RenderDriver, StitchDriver};
use std::sync::Arc;

#[cfg(feature = "http")]
use crate::{HttpRenderClient, HttpStitchClient};
#[cfg(feature = "http")]
use beatreel_core::EndpointConfig;

/// A render driver paired with a stitch driver.
#[derive(Clone)]
pub struct CapabilityDrivers {
    /// Renders single beats
    pub render: Arc<dyn RenderDriver>,
    /// Combines clips
    pub stitch: Arc<dyn StitchDriver>,
}

impl std::fmt::Debug for CapabilityDrivers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityDrivers")
            .field("render", &self.render.provider_name())
            .field("stitch", &self.stitch.provider_name())
            .finish()
    }
}

/// Drivers that never leave the process.
pub fn placeholder_drivers() -> CapabilityDrivers {
    CapabilityDrivers {
        render: Arc::new(PlaceholderRenderDriver),
        stitch: Arc::new(PlaceholderStitchDriver),
    }
}

/// HTTP clients for the configured endpoints.
#[cfg(feature = "http")]
pub fn http_drivers(endpoints: &EndpointConfig) -> CapabilityDrivers {
    CapabilityDrivers {
        render: Arc::new(HttpRenderClient::from_config(endpoints)),
        stitch: Arc::new(HttpStitchClient::from_config(endpoints)),
    }
}
