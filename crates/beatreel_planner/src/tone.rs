//! Lexicon-based mood classification.

use crate::text::normalized_words;
use beatreel_core::EmotionalTone;
use beatreel_interface::ToneClassifier;
use std::collections::HashMap;

/// Word stems per tone. Stems of four or more letters match as prefixes
/// (`storm` matches `storms`, `stormy`); shorter ones must match exactly.
const LEXICON: &[(EmotionalTone, &[&str])] = &[
    (
        EmotionalTone::Tense,
        &[
            "storm", "thunder", "chase", "danger", "threat", "fear", "panic", "erupt", "explod",
            "scream", "gun", "fight", "attack", "flee", "escape", "alarm", "crash", "urgen",
            "tense", "tension", "dread", "siren", "trap",
        ],
    ),
    (
        EmotionalTone::Joyful,
        &[
            "laugh", "joy", "celebrat", "smile", "danc", "cheer", "delight", "party", "grin",
            "happy", "happi", "playful", "festiv",
        ],
    ),
    (
        EmotionalTone::Melancholic,
        &[
            "tear", "loss", "lost", "alone", "grief", "griev", "mourn", "broken", "lonel",
            "sorrow", "empty", "funeral", "weep", "regret", "rain",
        ],
    ),
    (
        EmotionalTone::Mysterious,
        &[
            "secret", "myster", "clue", "hidden", "discover", "shadow", "strange", "whisper",
            "unknown", "cryptic", "puzzl", "enigma", "reveal", "forgotten", "flashback",
        ],
    ),
    (
        EmotionalTone::Triumphant,
        &[
            "climax", "triumph", "victor", "swell", "conquer", "release", "soar", "glory",
            "hero", "finale", "win",
        ],
    ),
    (
        EmotionalTone::Hopeful,
        &[
            "dawn", "hope", "sunrise", "begin", "light", "promise", "rebirth", "heal", "ignit",
            "bloom", "renew",
        ],
    ),
    (
        EmotionalTone::Reflective,
        &[
            "remember", "memor", "record", "aftermath", "listen", "quiet", "reflect", "recall",
            "narrat", "wonder", "silence", "calm", "ponder",
        ],
    ),
];

/// Minimum stem length for prefix matching.
const PREFIX_MIN: usize = 4;

/// Scores text against a fixed mood lexicon.
///
/// The tone with the most hits wins. Ties go to the tone whose first hit comes
/// earliest in the text, so a leading cue such as `CLIMAX` settles a close call.
/// Text without any hit is [`EmotionalTone::Neutral`].
///
/// # Examples
///
/// ```
/// use beatreel_core::EmotionalTone;
/// use beatreel_interface::ToneClassifier;
/// use beatreel_planner::LexicalToneClassifier;
///
/// let classifier = LexicalToneClassifier;
/// assert_eq!(classifier.classify("Thunder rolls as the chase begins."), EmotionalTone::Tense);
/// assert_eq!(classifier.classify("A table, two chairs."), EmotionalTone::Neutral);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalToneClassifier;

impl LexicalToneClassifier {
    fn tone_of(word: &str) -> Option<EmotionalTone> {
        LEXICON.iter().find_map(|(tone, stems)| {
            stems
                .iter()
                .any(|stem| {
                    if stem.len() >= PREFIX_MIN {
                        word.starts_with(stem)
                    } else {
                        word == *stem
                    }
                })
                .then_some(*tone)
        })
    }
}

impl ToneClassifier for LexicalToneClassifier {
    fn classify(&self, text: &str) -> EmotionalTone {
        // tone -> (hits, first position)
        let mut scores: HashMap<EmotionalTone, (usize, usize)> = HashMap::new();
        for (position, word) in normalized_words(text).enumerate() {
            if let Some(tone) = Self::tone_of(&word) {
                let entry = scores.entry(tone).or_insert((0, position));
                entry.0 += 1;
            }
        }

        scores
            .into_iter()
            .max_by(|(tone_a, (hits_a, first_a)), (tone_b, (hits_b, first_b))| {
                hits_a
                    .cmp(hits_b)
                    .then(first_b.cmp(first_a))
                    .then(tone_b.cmp(tone_a))
            })
            .map(|(tone, _)| tone)
            .unwrap_or_default()
    }
}
