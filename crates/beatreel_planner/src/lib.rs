//! Script segmentation and beat planning for Beatreel.
//!
//! The [`Segmenter`] splits prose into ordered [`SceneUnit`]s using structural
//! cues (paragraphs, transition markers, sluglines) and sentence clustering. The
//! [`BeatPlanner`] turns those units into timed [`StoryBeat`](beatreel_core::StoryBeat)s
//! whose durations sum to the requested runtime, classifying each beat's mood
//! and setting along the way.
//!
//! # Example
//!
//! ```
//! use beatreel_core::{EmotionalTone, PlannerConfig};
//! use beatreel_planner::BeatPlanner;
//!
//! let planner = BeatPlanner::new(PlannerConfig::default()).expect("valid settings");
//! let beats = planner
//!     .plan_script("Climax:\n\nThe storm breaks and the choir swells in triumph.", 300.0)
//!     .expect("beats");
//!
//! assert_eq!(beats.len(), 1);
//! assert_eq!(*beats[0].duration_seconds(), 300.0);
//! assert_eq!(*beats[0].emotional_tone(), EmotionalTone::Triumphant);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allocate;
mod location;
mod planner;
mod segmenter;
mod text;
mod tone;

pub use location::SceneLocationExtractor;
pub use planner::BeatPlanner;
pub use segmenter::{SceneUnit, Segmenter};
pub use tone::LexicalToneClassifier;
