//! Animated welcome banner.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;

const TITLE: &str = "Dev survey";
const GLITCH_CHARS: &[char] = &['#', '@', '%', '&', '$', '!', '?', '*', '+', '=', '/', '\\'];
const FRAME_DURATION: Duration = Duration::from_millis(50);
const ANIMATION_DURATION: Duration = Duration::from_secs(2);

/// Clears the screen, plays the glitch animation on the fixed title for
/// about two seconds, then settles on the clean title and prints the static
/// instruction line.
///
/// Blocks for the animation duration; nothing else is scheduled. When stdout
/// is not a terminal, `colored` drops the styling on its own and the text
/// comes through plain.
pub fn welcome() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let mut rng = rand::rng();
    let frames = ANIMATION_DURATION.as_millis() / FRAME_DURATION.as_millis();
    for _ in 0..frames {
        let frame = glitch_frame(TITLE, &mut rng);
        print!("\r{}", frame.green().bold());
        stdout.flush()?;
        thread::sleep(FRAME_DURATION);
    }

    println!("\r{}", TITLE.green().bold());
    println!("{}", "Fill in some info about you".black().on_green().bold());
    Ok(())
}

/// Produces one animation frame: the title with a few characters replaced by
/// glitch noise. Spaces are left untouched so the word shape stays readable.
fn glitch_frame<R: Rng>(title: &str, rng: &mut R) -> String {
    title
        .chars()
        .map(|c| {
            if c != ' ' && rng.random_bool(0.3) {
                let idx = rng.random_range(0..GLITCH_CHARS.len());
                GLITCH_CHARS.get(idx).copied().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
