//! Sentence, word and label helpers shared by the segmenter and planner.

/// Tokens that end in a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "st", "jr", "sr", "vs", "etc", "int", "ext", "no", "approx",
];

/// Split prose into trimmed sentences.
///
/// A sentence ends at `.`, `!`, `?` or `…` (plus any closing quotes or
/// brackets) followed by whitespace, unless the terminator follows a known
/// abbreviation or the next word starts in lowercase.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    for i in 0..chars.len() {
        let (idx, c) = chars[i];
        if !matches!(c, '.' | '!' | '?' | '…') {
            continue;
        }

        let mut j = i + 1;
        while j < chars.len()
            && matches!(
                chars[j].1,
                '"' | '\'' | '”' | '’' | ')' | ']' | '.' | '!' | '?' | '…'
            )
        {
            j += 1;
        }
        if j >= chars.len() || !chars[j].1.is_whitespace() {
            continue;
        }

        let token_start = text[..idx]
            .rfind(char::is_whitespace)
            .map(|p| p + 1)
            .unwrap_or(0);
        let token = text[token_start..idx].to_lowercase();
        if c == '.' && ABBREVIATIONS.contains(&token.as_str()) {
            continue;
        }

        let next_word = chars[j..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace());
        if next_word.is_some_and(char::is_lowercase) {
            continue;
        }

        let end = chars[j].0;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Number of words carrying at least one alphanumeric character.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Whether the text holds anything other than punctuation and whitespace.
pub(crate) fn has_content(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Lowercased words stripped of surrounding punctuation, in text order.
pub(crate) fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
}

/// Short label taken from the first clause of the text.
pub(crate) fn derive_title(text: &str, max_words: usize) -> String {
    let clause = text
        .split(['.', ',', ';', ':', '!', '?', '—', '–'])
        .map(str::trim)
        .find(|c| has_content(c))
        .unwrap_or(text);

    let words: Vec<&str> = clause
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .collect();

    let mut title = words
        .iter()
        .take(max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > max_words {
        title.push('…');
    }
    capitalize(&title)
}

/// Leading sentences of the text that fit within `max_chars`.
///
/// At most two sentences are kept. A first sentence that alone exceeds the
/// limit is cut at a word boundary and marked with an ellipsis.
pub(crate) fn derive_summary(text: &str, max_chars: usize) -> String {
    let mut summary = String::new();
    for sentence in split_sentences(text).into_iter().take(2) {
        let extra = if summary.is_empty() { 0 } else { 1 };
        if summary.chars().count() + extra + sentence.chars().count() > max_chars {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(sentence);
    }

    if summary.is_empty() {
        summary = truncate_words(text.trim(), max_chars);
    }
    summary
}

fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out = String::new();
    for word in text.split_whitespace() {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + word.chars().count() + 1 > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    if out.is_empty() {
        out = text.chars().take(max_chars.saturating_sub(1)).collect();
    }
    out.push('…');
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
