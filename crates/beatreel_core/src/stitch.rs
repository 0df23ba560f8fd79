//! Stitching policy and outcome.

use serde::{Deserialize, Serialize};

/// How failed beats affect stitching.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StitchPolicy {
    /// Combine whatever completed, in beat order, skipping failed beats.
    #[default]
    BestEffort,
    /// Refuse to combine unless every beat completed.
    RequireAll,
}

/// What happened at the stitching step.
///
/// `Vetoed` means stitching was not attempted; `NoCompletedSegments` and
/// `Failed` mean it was attempted and produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StitchOutcome {
    /// Combined artifact produced.
    #[serde(rename_all = "camelCase")]
    Stitched {
        /// Reference to the combined artifact
        url: String,
        /// Number of clips combined
        segment_count: usize,
        /// Beats left out because they did not complete
        skipped_beats: Vec<String>,
    },
    /// No beat completed, so there was nothing to combine.
    NoCompletedSegments,
    /// Policy forbade stitching because some beats failed.
    #[serde(rename_all = "camelCase")]
    Vetoed {
        /// Beats that did not complete
        failed_beats: Vec<String>,
    },
    /// The stitching capability failed.
    Failed {
        /// Failure description
        message: String,
    },
}

impl StitchOutcome {
    /// Reference to the combined artifact, if one was produced.
    pub fn combined_url(&self) -> Option<&str> {
        match self {
            Self::Stitched { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Whether the stitching capability was (or would have been) asked to combine.
    pub fn was_attempted(&self) -> bool {
        !matches!(self, Self::Vetoed { .. })
    }
}
