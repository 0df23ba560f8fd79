//! Shared fixtures for planner tests.

#![allow(dead_code)]

/// Five-part screenplay exercising transitions, a slugline and a long climax.
pub const SKY_ECHO: &str = r#"Fade in:

The camera glides above a sleeping city as dawn ignites the horizon. Street lights pulse in sync with distant thunder. A lone tram curves through the mist, framing LENA, 29, a documentary director with a satchel of film reels. Her voice narrates: "Every city keeps a secret cadence. I chase those rhythms to reveal the human story beneath.".

Cut to:

INT. ARCHIVE BASEMENT - MORNING. Lena unspools reels. Dust dances in sunrise beams. She discovers a broken cassette labeled "SKY ECHO". The audio crackles with layered voices, meteorological reports, and a child humming. Her eyes widen. A forgotten sound experiment.

Montage:

Lena tracks clues across rooftop gardens, underground clubs, and an abandoned observatory. Each location reveals contributors to Sky Echo: a jazz trumpeter, a climate scientist, a VR choreographer. They speak about weaving sound to predict emotional weather.

Climax:

A storm engulfs the city. Lena coordinates the ensemble at the observatory. Instruments glow, sensors pulse, the music swells. As the storm erupts, their composition converts chaos into a wave of calming light. Citizens pause. Tears. Laughter. Release.

Fade out:

Lena records the aftermath. "The rhythm was never hidden. It waited for us to listen together." She uploads the finished film titled "Sky Echo" while the city hums in harmony."#;

/// Script of `count` short paragraphs with no cues.
pub fn numbered_paragraphs(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Paragraph {i} follows the courier through another quiet street."))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Three long paragraphs followed by many short ones.
///
/// At a 120 s target this plans 29 beats against a 30-beat floor limit, so
/// the long beats hit the ceiling while the short ones sit on the floor.
pub fn crowded_script() -> String {
    let long = "The courier crosses the wide bridge while the river carries lanterns toward the dark sea. "
        .repeat(4);
    let long = long.trim_end();
    let short = "Rain taps the window again.";

    std::iter::repeat_n(long, 3)
        .chain(std::iter::repeat_n(short, 26))
        .collect::<Vec<_>>()
        .join("\n\n")
}
