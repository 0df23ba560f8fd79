//! Tests for script segmentation.

mod test_utils;

use beatreel_core::PlannerConfig;
use beatreel_planner::Segmenter;
use test_utils::SKY_ECHO;

fn segmenter() -> Segmenter {
    Segmenter::new(&PlannerConfig::default())
}

#[test]
fn test_screenplay_splits_on_transitions() {
    let units = segmenter().segment(SKY_ECHO);

    assert_eq!(units.len(), 5);
    let transitions: Vec<Option<&str>> = units.iter().map(|u| u.transition().as_deref()).collect();
    assert_eq!(
        transitions,
        vec![
            Some("FADE IN"),
            Some("CUT TO"),
            Some("MONTAGE"),
            Some("CLIMAX"),
            Some("FADE OUT")
        ]
    );
    assert_eq!(units[1].slugline().as_deref(), Some("ARCHIVE BASEMENT - MORNING"));
    assert!(units[1].text().starts_with("Lena unspools reels."));
}

#[test]
fn test_unit_indices_follow_script_order() {
    let units = segmenter().segment(SKY_ECHO);
    for (expected, unit) in units.iter().enumerate() {
        assert_eq!(*unit.index(), expected);
    }
    assert!(units[0].text().starts_with("The camera glides"));
    assert!(units[4].text().starts_with("Lena records the aftermath."));
}

#[test]
fn test_short_trailing_sentences_stay_in_their_scene() {
    let units = segmenter().segment(SKY_ECHO);
    assert!(units[3].text().ends_with("Tears. Laughter. Release."));
}

#[test]
fn test_markers_only_yield_no_units() {
    let units = segmenter().segment("Fade in:\n\nCut to:\n\n...\n\nFade out:");
    assert!(units.is_empty());
}

#[test]
fn test_unstructured_text_is_one_unit() {
    let units = segmenter().segment("A courier crosses the bridge at dusk with a sealed letter.");
    assert_eq!(units.len(), 1);
    assert!(units[0].transition().is_none());
}

#[test]
fn test_marker_with_inline_text() {
    let units = segmenter().segment("CLIMAX: The dam gives way and the valley floods.");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].transition().as_deref(), Some("CLIMAX"));
    assert_eq!(units[0].text(), "The dam gives way and the valley floods.");
}

#[test]
fn test_long_paragraph_splits_on_shift_cue() {
    let script = "Mara wakes in the lighthouse. She checks the lamp. The sea is calm. \
                  Gulls circle overhead. She writes in the log. \
                  Later, a trawler drifts toward the rocks. Mara signals with the lamp. \
                  The crew waves back. The trawler turns away.";
    let units = segmenter().segment(script);

    assert_eq!(units.len(), 2);
    assert!(units[1].text().starts_with("Later, a trawler drifts"));
}

#[test]
fn test_long_paragraph_respects_sentence_cap() {
    let config = PlannerConfig {
        max_sentences_per_unit: 2,
        ..PlannerConfig::default()
    };
    let script = "One man walks home. Two dogs bark loudly. Three cars pass by. \
                  Four lamps flicker on. Five doors close shut.";
    let units = Segmenter::new(&config).segment(script);

    assert_eq!(units.len(), 3);
    assert_eq!(units[0].text(), "One man walks home. Two dogs bark loudly.");
    assert_eq!(units[2].text(), "Five doors close shut.");
}

#[test]
fn test_slugline_without_prose_becomes_setting_unit() {
    let units = segmenter().segment("EXT. ROOFTOP GARDEN - NIGHT\n\nINT. KITCHEN - DAY\n\nMara boils water for tea.");

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].text(), "ROOFTOP GARDEN - NIGHT");
    assert_eq!(units[1].slugline().as_deref(), Some("KITCHEN - DAY"));
    assert_eq!(units[1].text(), "Mara boils water for tea.");
}

#[test]
fn test_tiny_fragment_folds_into_previous_unit() {
    let units = segmenter().segment("The convoy rolls through the desert at noon.\n\nSilence.");
    assert_eq!(units.len(), 1);
    assert!(units[0].text().ends_with("Silence."));
}
