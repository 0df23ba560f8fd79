//! Script segmentation into ordered scene units.
//!
//! Structural cues come first: blank lines separate paragraphs, transition
//! markers (`FADE IN:`, `CUT TO:`, `MONTAGE:`, `CLIMAX:` ...) and sluglines
//! (`INT.`, `EXT.`) open a new unit. Paragraphs longer than
//! `max_sentences_per_unit` are split into sentence clusters, preferring to break
//! where a sentence opens with a time or place shift ("Later", "Meanwhile").

use crate::text::{has_content, split_sentences, word_count};
use beatreel_core::PlannerConfig;
use derive_getters::Getters;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(fade in|fade out|fade to black|cut to|smash cut to|match cut to|dissolve to|end montage|montage|climax|intercut|end flashback|flashback|title card|the end|prologue|epilogue|scene \d+|act (?:one|two|three|four|five|[ivx]+|\d+))\s*(?:[:.]\s*(.*))?$",
    )
    .expect("Valid transition regex")
});

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9' ]{0,30}):$").expect("Valid heading regex")
});

static SLUGLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:INT\./EXT\.|INT/EXT|I/E|INT\.|EXT\.)\s*(.*)$").expect("Valid slugline regex")
});

static SHIFT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:later|meanwhile|elsewhere|suddenly|across town|back (?:at|in)|(?:hours|days|weeks|years) later|the next (?:morning|day|night|evening)|that (?:night|evening|morning|afternoon))\b",
    )
    .expect("Valid shift regex")
});

/// Longest free-standing `Label:` line treated as a section heading.
const MAX_HEADING_WORDS: usize = 4;

/// A contiguous stretch of the script that becomes at most one beat.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SceneUnit {
    /// Position in the script, starting at zero.
    index: usize,
    /// Prose of the unit with line breaks collapsed.
    text: String,
    /// Transition marker that opened the unit, uppercased (`CUT TO`, `CLIMAX`).
    transition: Option<String>,
    /// Slugline heading that opened the unit (`ARCHIVE BASEMENT - MORNING`).
    slugline: Option<String>,
}

impl SceneUnit {
    /// Create a unit directly, e.g. from a custom segmentation.
    pub fn new(
        index: usize,
        text: impl Into<String>,
        transition: Option<String>,
        slugline: Option<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            transition,
            slugline,
        }
    }

    /// Number of words in the unit's prose.
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    pub(crate) fn has_cue(&self) -> bool {
        self.transition.is_some() || self.slugline.is_some()
    }

    /// Append the following unit, keeping this unit's cues where present.
    pub(crate) fn absorb(&mut self, next: SceneUnit) {
        if !next.text.is_empty() {
            if !self.text.is_empty() {
                self.text.push(' ');
            }
            self.text.push_str(&next.text);
        }
        if self.transition.is_none() {
            self.transition = next.transition;
        }
        if self.slugline.is_none() {
            self.slugline = next.slugline;
        }
    }
}

#[derive(Debug, Default)]
struct Block {
    lines: Vec<String>,
    transition: Option<String>,
    slugline: Option<String>,
}

impl Block {
    fn open(line: &str, transition: Option<String>, slugline: Option<String>) -> Self {
        Self {
            lines: vec![line.to_string()],
            transition,
            slugline,
        }
    }
}

/// Splits a script into ordered [`SceneUnit`]s.
///
/// # Examples
///
/// ```
/// use beatreel_core::PlannerConfig;
/// use beatreel_planner::Segmenter;
///
/// let segmenter = Segmenter::new(&PlannerConfig::default());
/// let units = segmenter.segment("Fade in:\n\nThe city wakes under a copper sky.\n\nCut to:\n\nA tram hums past the harbor.");
///
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[0].transition().as_deref(), Some("FADE IN"));
/// assert_eq!(units[1].transition().as_deref(), Some("CUT TO"));
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    max_sentences: usize,
    min_unit_words: usize,
}

impl Segmenter {
    /// Create a segmenter from planner settings.
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            max_sentences: config.max_sentences_per_unit.max(1),
            min_unit_words: config.min_unit_words,
        }
    }

    /// Segment a script into ordered units.
    ///
    /// Returns an empty list only when the script holds nothing but
    /// transition markers, punctuation and whitespace.
    #[instrument(skip(self, script), fields(script_chars = script.chars().count()))]
    pub fn segment(&self, script: &str) -> Vec<SceneUnit> {
        let blocks = collect_blocks(script);
        debug!(blocks = blocks.len(), "Collected script blocks");

        let mut units = Vec::new();
        for block in blocks {
            self.split_block(block, &mut units);
        }

        let units: Vec<SceneUnit> = self
            .fold_fragments(units)
            .into_iter()
            .enumerate()
            .map(|(index, unit)| SceneUnit { index, ..unit })
            .collect();

        debug!(units = units.len(), "Segmented script");
        units
    }

    fn split_block(&self, block: Block, units: &mut Vec<SceneUnit>) {
        let text = block.lines.join(" ");
        if !has_content(&text) {
            return;
        }

        let sentences = split_sentences(&text);
        if sentences.len() <= self.max_sentences {
            units.push(SceneUnit::new(0, text, block.transition, block.slugline));
            return;
        }

        let mut clusters: Vec<Vec<&str>> = Vec::new();
        for sentence in sentences {
            let starts_new = match clusters.last() {
                None => true,
                Some(cluster) => {
                    cluster.len() >= self.max_sentences
                        || (SHIFT.is_match(sentence)
                            && word_count(&cluster.join(" ")) >= self.min_unit_words)
                }
            };
            if starts_new {
                clusters.push(vec![sentence]);
            } else if let Some(cluster) = clusters.last_mut() {
                cluster.push(sentence);
            }
        }
        debug!(clusters = clusters.len(), "Split long paragraph");

        let mut transition = block.transition;
        let mut slugline = block.slugline;
        for cluster in clusters {
            units.push(SceneUnit::new(
                0,
                cluster.join(" "),
                transition.take(),
                slugline.take(),
            ));
        }
    }

    /// Fold units shorter than `min_unit_words` into a neighbour.
    ///
    /// Uncued fragments join the preceding unit; cued fragments (and a leading
    /// fragment) join the following one so their cue opens the merged unit.
    fn fold_fragments(&self, units: Vec<SceneUnit>) -> Vec<SceneUnit> {
        let mut folded: Vec<SceneUnit> = Vec::with_capacity(units.len());
        let mut pending: Option<SceneUnit> = None;

        for unit in units {
            let unit = match pending.take() {
                Some(mut head) => {
                    head.absorb(unit);
                    head
                }
                None => unit,
            };
            if unit.word_count() >= self.min_unit_words {
                folded.push(unit);
                continue;
            }
            match folded.last_mut() {
                Some(prev) if !unit.has_cue() => prev.absorb(unit),
                _ => pending = Some(unit),
            }
        }

        if let Some(rest) = pending {
            match folded.last_mut() {
                Some(prev) => prev.absorb(rest),
                None => folded.push(rest),
            }
        }
        folded
    }
}

/// Group script lines into paragraph blocks carrying their opening cues.
fn collect_blocks(script: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    let mut transition: Option<String> = None;
    let mut slugline: Option<String> = None;

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() {
            blocks.extend(current.take());
            continue;
        }

        if let Some(caps) = TRANSITION.captures(line) {
            blocks.extend(current.take());
            blocks.extend(orphan_slugline(&mut transition, &mut slugline));
            transition = Some(normalize_label(&caps[1]));
            let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if has_content(rest) {
                current = Some(Block::open(rest, transition.take(), None));
            }
            continue;
        }

        if let Some(label) = heading_label(line) {
            blocks.extend(current.take());
            blocks.extend(orphan_slugline(&mut transition, &mut slugline));
            transition = Some(normalize_label(label));
            continue;
        }

        if let Some(caps) = SLUGLINE.captures(line) {
            blocks.extend(current.take());
            blocks.extend(orphan_slugline(&mut transition, &mut slugline));
            let (heading, rest) = split_slugline(caps.get(1).map_or("", |m| m.as_str()));
            if has_content(rest) {
                current = Some(Block::open(rest, transition.take(), Some(heading)));
            } else if has_content(&heading) {
                slugline = Some(heading);
            }
            continue;
        }

        match current.as_mut() {
            Some(block) => block.lines.push(line.to_string()),
            None => current = Some(Block::open(line, transition.take(), slugline.take())),
        }
    }

    blocks.extend(current.take());
    blocks.extend(orphan_slugline(&mut transition, &mut slugline));
    blocks
}

/// Free-standing `Act One:` style line, every word capitalized.
fn heading_label(line: &str) -> Option<&str> {
    let label = HEADING.captures(line)?.get(1)?.as_str();
    let mut words = label.split_whitespace().peekable();
    words.peek()?;
    let capitalized = words.all(|w| {
        w.chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
    });
    (capitalized && label.split_whitespace().count() <= MAX_HEADING_WORDS).then_some(label)
}

/// A slugline with no prose of its own becomes a unit describing the setting.
fn orphan_slugline(
    transition: &mut Option<String>,
    slugline: &mut Option<String>,
) -> Option<Block> {
    let heading = slugline.take()?;
    Some(Block::open(&heading, transition.take(), Some(heading.clone())))
}

/// Split `ARCHIVE BASEMENT - MORNING. Lena unspools reels.` into heading and prose.
fn split_slugline(remainder: &str) -> (String, &str) {
    let remainder = remainder.trim();
    let mut cut = None;
    let mut chars = remainder.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c == '.' && chars.peek().is_none_or(|(_, next)| next.is_whitespace()) {
            cut = Some(idx);
            break;
        }
    }
    match cut {
        Some(idx) => (
            remainder[..idx].trim().to_string(),
            remainder[idx + 1..].trim(),
        ),
        None => (remainder.to_string(), ""),
    }
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_slugline_with_prose() {
        let (heading, rest) = split_slugline("ARCHIVE BASEMENT - MORNING. Lena unspools reels.");
        assert_eq!(heading, "ARCHIVE BASEMENT - MORNING");
        assert_eq!(rest, "Lena unspools reels.");
    }

    #[test]
    fn test_split_slugline_heading_only() {
        let (heading, rest) = split_slugline("ROOFTOP GARDEN - NIGHT");
        assert_eq!(heading, "ROOFTOP GARDEN - NIGHT");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_transition_requires_terminator_or_line_end() {
        assert!(TRANSITION.is_match("Fade in:"));
        assert!(TRANSITION.is_match("CUT TO"));
        assert!(TRANSITION.is_match("Climax: the storm breaks."));
        assert!(!TRANSITION.is_match("The end of the road comes quickly."));
        assert!(!TRANSITION.is_match("Montage sequences bore her."));
    }

    #[test]
    fn test_heading_label_needs_capitalized_words() {
        assert_eq!(heading_label("Act One:"), Some("Act One"));
        assert_eq!(heading_label("OPENING SEQUENCE:"), Some("OPENING SEQUENCE"));
        assert_eq!(heading_label("She turns and says:"), None);
        assert_eq!(heading_label("The Very Long Heading Here:"), None);
    }

    #[test]
    fn test_shift_cue_matches_sentence_openers() {
        assert!(SHIFT.is_match("Later, the tram empties."));
        assert!(SHIFT.is_match("The next morning the city is silent."));
        assert!(!SHIFT.is_match("She meanwhile waits."));
    }
}
