//! Setting extraction from scene text.

use beatreel_interface::LocationExtractor;

/// Nouns that name a place a scene can be set in.
const SETTING_NOUNS: &[&str] = &[
    "airport", "alley", "apartment", "archive", "arena", "attic", "bar", "basement", "battlefield",
    "beach", "bedroom", "boat", "bridge", "cabin", "cafe", "camp", "canyon", "castle", "cathedral",
    "cave", "cemetery", "church", "city", "classroom", "cliff", "clinic", "club", "coast",
    "corridor", "courtroom", "desert", "diner", "dock", "factory", "farm", "field", "forest",
    "gallery", "garden", "graveyard", "hallway", "harbor", "harbour", "highway", "hospital",
    "hotel", "house", "island", "jungle", "kitchen", "lab", "laboratory", "lake", "library",
    "mall", "mansion", "market", "museum", "observatory", "ocean", "office", "palace", "park",
    "planet", "platform", "plaza", "port", "prison", "restaurant", "river", "road", "roof",
    "rooftop", "school", "sea", "ship", "shop", "square", "stadium", "station", "store",
    "street", "studio", "subway", "temple", "theater", "theatre", "tower", "town", "train",
    "tram", "tunnel", "university", "valley", "village", "warehouse", "woods",
];

/// Words that end a descriptive run in front of a setting noun.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "his", "her", "their", "its", "our",
    "my", "your", "at", "in", "into", "on", "onto", "across", "through", "above", "below",
    "over", "under", "to", "from", "of", "by", "near", "inside", "outside", "toward", "towards",
    "and", "or", "but", "as", "with", "while", "is", "are", "was", "were", "she", "he", "they",
    "we", "it", "each", "every",
];

/// Longest run of descriptive words kept in front of the setting noun.
const MAX_DESCRIPTORS: usize = 2;

/// Finds the first setting in a scene.
///
/// A slugline heading (`ARCHIVE BASEMENT - MORNING`) wins when present; its
/// place part is used, without the time of day. Otherwise the first setting
/// noun in the text is taken together with up to two descriptive words in
/// front of it and any setting nouns directly after it (`rooftop gardens`).
/// Results are lowercase.
///
/// # Examples
///
/// ```
/// use beatreel_interface::LocationExtractor;
/// use beatreel_planner::SceneLocationExtractor;
///
/// let extractor = SceneLocationExtractor;
/// assert_eq!(
///     extractor.extract("The camera glides above a sleeping city at dawn.").as_deref(),
///     Some("sleeping city")
/// );
/// assert_eq!(extractor.extract("Her eyes widen."), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneLocationExtractor;

impl SceneLocationExtractor {
    /// Place part of a slugline heading, lowercased.
    pub fn from_slugline(heading: &str) -> Option<String> {
        let place = heading
            .split(" - ")
            .next()
            .unwrap_or(heading)
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric());
        (!place.is_empty()).then(|| place.to_lowercase())
    }

    fn is_setting(word: &str) -> bool {
        SETTING_NOUNS.contains(&word)
            || word
                .strip_suffix("es")
                .is_some_and(|stem| SETTING_NOUNS.contains(&stem))
            || word
                .strip_suffix('s')
                .is_some_and(|stem| SETTING_NOUNS.contains(&stem))
    }
}

/// One whitespace-separated token and whether punctuation closes it.
struct Token {
    word: String,
    closes: bool,
    opens: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|raw| Token {
            word: raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase(),
            closes: raw
                .chars()
                .last()
                .is_some_and(|c| !c.is_alphanumeric()),
            opens: raw
                .chars()
                .next()
                .is_some_and(|c| !c.is_alphanumeric()),
        })
        .collect()
}

impl LocationExtractor for SceneLocationExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        let tokens = tokenize(text);
        let anchor = tokens.iter().position(|t| Self::is_setting(&t.word))?;

        let mut start = anchor;
        while start > 0 && anchor - start < MAX_DESCRIPTORS {
            let prev = &tokens[start - 1];
            let descriptive = !prev.word.is_empty()
                && !prev.closes
                && !tokens[start].opens
                && prev.word.chars().all(char::is_alphabetic)
                && !STOP_WORDS.contains(&prev.word.as_str());
            if !descriptive {
                break;
            }
            start -= 1;
        }

        let mut end = anchor;
        while end + 1 < tokens.len()
            && !tokens[end].closes
            && Self::is_setting(&tokens[end + 1].word)
        {
            end += 1;
        }

        let phrase = tokens[start..=end]
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(phrase)
    }

    fn extract_with_slugline(&self, text: &str, slugline: Option<&str>) -> Option<String> {
        slugline
            .and_then(Self::from_slugline)
            .or_else(|| self.extract(text))
    }
}
