//! Console rendering of a race.

use crate::runner::Standing;
use hippodrome_core::{Hippodrome, Horse};
use std::fmt::Write;

/// Widest track drawn, in dots.
pub const TRACK_WIDTH: usize = 200;

/// Draws the track: one line per horse, a dot for every whole unit of
/// distance followed by the name, then a blank line.
///
/// Once the leader is past [`TRACK_WIDTH`] the whole field is scaled so the
/// leader sits at exactly `TRACK_WIDTH` dots.
pub fn render_track(hippodrome: &Hippodrome) -> String {
    let width = TRACK_WIDTH as f64;
    let lead = hippodrome.winner().distance();

    let mut out = String::new();
    for horse in hippodrome.horses() {
        let position = if lead > width {
            horse.distance() * width / lead
        } else {
            horse.distance()
        };
        let dots = (position.floor() as usize).min(TRACK_WIDTH);
        out.push_str(&".".repeat(dots));
        out.push_str(horse.name());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Returns the closing line of a race, `Winner is <name>!`.
pub fn announce_winner(winner: &Horse) -> String {
    format!("Winner is {}!", winner.name())
}

/// Formats final standings as an aligned table.
pub fn render_standings(standings: &[Standing]) -> String {
    let width = standings.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for s in standings {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>2}. {:<width$}  speed {:>5.2}  distance {:>8.2}",
            s.place,
            s.name,
            s.speed,
            s.distance,
            width = width
        );
    }
    out
}
