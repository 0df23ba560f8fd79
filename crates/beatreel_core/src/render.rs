//! Per-beat render outcomes.

use crate::StoryBeat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Lifecycle of one beat's render.
///
/// `Completed` and `Failed` are terminal: once reached, the status never changes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RenderStatus {
    /// Not started
    Pending,
    /// Request issued to the rendering capability
    Rendering,
    /// Video reference available
    Completed,
    /// Render gave up; see the message
    Failed,
}

impl RenderStatus {
    /// Whether no further transition can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// One render outcome, keyed by beat identifier.
///
/// # Examples
///
/// ```
/// use beatreel_core::{RenderStatus, SceneRender};
///
/// let render = SceneRender::pending("beat-01")
///     .begin()
///     .complete("https://cdn.example/beat-01.mp4");
/// assert_eq!(*render.status(), RenderStatus::Completed);
///
/// // Terminal states are never reverted.
/// let render = render.fail("late failure");
/// assert_eq!(*render.status(), RenderStatus::Completed);
/// assert!(render.message().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SceneRender {
    /// Beat this render belongs to.
    beat_id: String,
    /// Current status.
    status: RenderStatus,
    /// Resulting clip, present only when completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
    /// Failure description, present only when failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl SceneRender {
    /// A render that has not started yet.
    pub fn pending(beat_id: impl Into<String>) -> Self {
        Self {
            beat_id: beat_id.into(),
            status: RenderStatus::Pending,
            video_url: None,
            message: None,
        }
    }

    /// Mark the render as in flight.
    pub fn begin(mut self) -> Self {
        if self.status == RenderStatus::Pending {
            self.status = RenderStatus::Rendering;
        } else {
            warn!(beat_id = %self.beat_id, status = %self.status, "Ignoring begin on started render");
        }
        self
    }

    /// Transition to `Completed` with the produced clip.
    pub fn complete(mut self, video_url: impl Into<String>) -> Self {
        if self.status.is_terminal() {
            warn!(beat_id = %self.beat_id, status = %self.status, "Ignoring completion of terminal render");
            return self;
        }
        self.status = RenderStatus::Completed;
        self.video_url = Some(video_url.into());
        self
    }

    /// Transition to `Failed` with a human-readable reason.
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        if self.status.is_terminal() {
            warn!(beat_id = %self.beat_id, status = %self.status, "Ignoring failure of terminal render");
            return self;
        }
        self.status = RenderStatus::Failed;
        self.video_url = None;
        self.message = Some(message.into());
        self
    }

    /// Whether the render completed with a clip.
    pub fn is_completed(&self) -> bool {
        self.status == RenderStatus::Completed
    }

    /// Whether the render failed.
    pub fn is_failed(&self) -> bool {
        self.status == RenderStatus::Failed
    }
}

/// All render outcomes of one request.
///
/// Physical order carries no meaning; consumers join on beat identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderSet(Vec<SceneRender>);

impl RenderSet {
    /// Wrap a list of renders.
    pub fn new(renders: Vec<SceneRender>) -> Self {
        Self(renders)
    }

    /// Look up the render for a beat.
    pub fn get(&self, beat_id: &str) -> Option<&SceneRender> {
        self.0.iter().find(|r| r.beat_id == beat_id)
    }

    /// Iterate over every render.
    pub fn iter(&self) -> impl Iterator<Item = &SceneRender> {
        self.0.iter()
    }

    /// Iterate over completed renders.
    pub fn completed(&self) -> impl Iterator<Item = &SceneRender> {
        self.0.iter().filter(|r| r.is_completed())
    }

    /// Iterate over failed renders.
    pub fn failed(&self) -> impl Iterator<Item = &SceneRender> {
        self.0.iter().filter(|r| r.is_failed())
    }

    /// Whether every render completed.
    pub fn all_completed(&self) -> bool {
        self.0.iter().all(SceneRender::is_completed)
    }

    /// Number of renders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether there is exactly one terminal render per beat and nothing else.
    pub fn covers(&self, beats: &[StoryBeat]) -> bool {
        if self.0.len() != beats.len() || !self.0.iter().all(|r| r.status.is_terminal()) {
            return false;
        }
        let ids: HashSet<&str> = self.0.iter().map(|r| r.beat_id.as_str()).collect();
        ids.len() == self.0.len() && beats.iter().all(|b| ids.contains(b.id().as_str()))
    }

    /// Unwrap into the underlying list.
    pub fn into_inner(self) -> Vec<SceneRender> {
        self.0
    }
}

impl From<Vec<SceneRender>> for RenderSet {
    fn from(renders: Vec<SceneRender>) -> Self {
        Self(renders)
    }
}

impl IntoIterator for RenderSet {
    type Item = SceneRender;
    type IntoIter = std::vec::IntoIter<SceneRender>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
