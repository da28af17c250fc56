//! Scoreboard text and the end-of-game verdict.

pub const DEATH_MESSAGE: &str = "YA DIED";

/// In-game kill counter, e.g. `K: 000042`.
pub fn scoreboard_label(kills: u32) -> String {
    format!("K: {:0>6}", kills)
}

pub fn kills_line(kills: u32) -> String {
    format!("but got {} kills", kills)
}

pub fn commentary(kills: u32) -> &'static str {
    match kills {
        0..=2 => "too bad you suck",
        3..=9 => "were you even trying?",
        10..=19 => "not great",
        20..=49 => "not terrible",
        50..=99 => "decent",
        100..=999 => "wow very nice",
        _ => "wait, what how?! Did you cheat?",
    }
}
