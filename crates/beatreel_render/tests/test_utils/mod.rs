//! Test utilities for render and pipeline tests.
//!
//! This module provides mock capability drivers and beat fixtures.

#![allow(dead_code)]

pub mod mock_drivers;

#[allow(unused_imports)]
pub use mock_drivers::{MockBehavior, MockRenderDriver, MockStitchDriver};

use beatreel_core::{EmotionalTone, StoryBeat};

/// Plan of `count` beats, ten seconds each, ordered from one.
pub fn beats(count: u32) -> Vec<StoryBeat> {
    (1..=count)
        .map(|order| {
            StoryBeat::new(
                format!("beat-{order:02}"),
                order,
                format!("Scene {order}"),
                format!("Summary of scene {order}."),
                10.0,
                EmotionalTone::Neutral,
                "unspecified",
            )
        })
        .collect()
}

/// Script with four transition-separated scenes.
pub const FOUR_SCENES: &str = "Fade in:\n\nA storm gathers over the harbor as the ferry leaves.\n\nCut to:\n\nThe lighthouse keeper climbs the tower stairs with a lantern.\n\nMontage:\n\nSailors haul ropes, gulls scatter, waves break over the bow.\n\nFade out:\n\nThe ferry docks at dawn and the passengers step ashore.";
