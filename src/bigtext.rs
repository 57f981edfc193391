//! Decorative block-letter rendering for the completion banner.

use crate::error::SurveyError;

const GLYPH_ROWS: usize = 5;

/// Renders `text` as block letters, one glyph per character.
///
/// Lookup is case-insensitive. Returns `SurveyError::Rendering` carrying the
/// first character that has no glyph; callers decide whether that is fatal.
pub fn render(text: &str) -> Result<String, SurveyError> {
    let mut lines = vec![String::new(); GLYPH_ROWS];

    for c in text.chars() {
        let glyph = glyph(c).ok_or(SurveyError::Rendering(c))?;
        for (line, row) in lines.iter_mut().zip(glyph) {
            line.push_str(row);
        }
    }

    Ok(lines.join("\n"))
}

#[rustfmt::skip]
fn glyph(c: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let glyph = match c.to_ascii_uppercase() {
        'D' => [
            "8888o.  ",
            "888 `8b ",
            "888  88 ",
            "888 .8P ",
            "8888P'  ",
        ],
        'E' => [
            "888888 ",
            "888    ",
            "8888o  ",
            "888    ",
            "888888 ",
        ],
        'N' => [
            "888o  88 ",
            "8888o 88 ",
            "88 8888b ",
            "88  8888 ",
            "88   888 ",
        ],
        'O' => [
            ".d888b. ",
            "888  88 ",
            "888  88 ",
            "888  88 ",
            "`8888P' ",
        ],
        'S' => [
            ".d888b ",
            "88b    ",
            "`8888b ",
            "   888 ",
            "8888P' ",
        ],
        'U' => [
            "88  88 ",
            "88  88 ",
            "88  88 ",
            "88  88 ",
            "`8888' ",
        ],
        'V' => [
            "88   88 ",
            "88   88 ",
            "`8b d8' ",
            " `888'  ",
            "  `8'   ",
        ],
        'Y' => [
            "88  88 ",
            "`8b88' ",
            " `88'  ",
            "  88   ",
            "  88   ",
        ],
        '!' => [
            "88 ",
            "88 ",
            "88 ",
            "   ",
            "88 ",
        ],
        ' ' => [
            "   ",
            "   ",
            "   ",
            "   ",
            "   ",
        ],
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_done_banner() {
        let art = render("Done!").unwrap();
        assert_eq!(art.lines().count(), GLYPH_ROWS);
        // Every row spans all five glyphs.
        let widths: Vec<usize> = art.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_render_is_case_insensitive() {
        assert_eq!(render("done").unwrap(), render("DONE").unwrap());
    }

    #[test]
    fn test_render_reports_the_unsupported_character() {
        let error = render("Done?").unwrap_err();
        assert!(matches!(error, SurveyError::Rendering('?')));
    }

    #[test]
    fn test_render_empty_text_is_blank_rows() {
        let art = render("").unwrap();
        assert!(art.chars().all(|c| c == '\n'));
    }
}
