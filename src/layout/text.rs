use crate::colour::Colour;
use crate::font::Font;
use crate::page::*;
use crate::units::Pt;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.width_of(text, size)
}

/// The x coordinate at which `text` must start for it to be centred on `centre`
pub fn centred_start(centre: Pt, text: &str, font: &Font, size: Pt) -> Pt {
    centre - width_of_text(text, font, size) / 2.0
}

/// Greedily breaks `text` into lines no wider than `max_width`.
///
/// Words (whitespace-delimited) are appended to the current line one at a time.
/// A word is kept on the line while the measured width of the line stays strictly
/// below `max_width`; otherwise the line is finished and the word starts the next
/// one. Words are never split, so a single word wider than `max_width` ends up alone
/// on its own line. Runs of whitespace collapse into single spaces.
///
/// `measure` returns the rendered width of a candidate line, normally
/// [width_of_text] bound to the font and size the lines will be drawn with.
pub fn wrap_greedy<M>(text: &str, max_width: Pt, measure: M) -> Vec<String>
where
    M: Fn(&str) -> Pt,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate) < max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// [wrap_greedy] measured with the given font and size
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    wrap_greedy(text, max_width, |line| width_of_text(line, font, size))
}

/// Places each line centred on `centre`, the first baseline at `start_y` and each
/// following baseline `line_step` lower, as a single text run. Nothing stops the
/// lines from running off the bottom of the page.
///
/// Returns the baseline of the last line placed, or `start_y` if there were no lines.
pub fn layout_centred_lines(
    page: &mut Page,
    lines: &[String],
    font: (SpanFont, &Font),
    colour: Colour,
    centre: Pt,
    start_y: Pt,
    line_step: Pt,
) -> Pt {
    let (span_font, metrics) = font;
    let mut y = start_y;
    let mut spans = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            y -= line_step;
        }
        spans.push(SpanLayout {
            text: line.clone(),
            font: span_font,
            colour,
            coords: (centred_start(centre, line, metrics, span_font.size), y),
        });
    }
    page.add_spans(spans);
    y
}
