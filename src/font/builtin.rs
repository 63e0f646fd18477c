use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// The standard-14 Helvetica family. These fonts are referenced by name and rendered
/// by the viewer, using WinAnsiEncoding for the text bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

// Helvetica ascender / descender from the Adobe Core14 AFM files, in 1/1000 em
const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;

impl BuiltinFont {
    /// The PostScript name written as the `BaseFont` of the font dictionary
    pub fn postscript_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    // the oblique cuts share advance widths with their upright counterparts
    fn widths(&self) -> &'static [u16; 224] {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
        }
    }

    /// Advance width of a single WinAnsi code, in 1/1000 em
    fn advance(&self, code: u8) -> u16 {
        if code < 32 {
            return 0;
        }
        self.widths()[(code - 32) as usize]
    }

    /// Calculate the width of `text` at the given size. Characters outside of
    /// WinAnsiEncoding are measured as the `?` they will be rendered as.
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|code| self.advance(code) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }

    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENDER / 1000.0)
    }

    pub fn descent(&self, size: Pt) -> Pt {
        size * (DESCENDER / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.postscript_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Map a character onto its WinAnsiEncoding (Windows-1252) code, if it has one
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(code)
}

pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| win_ansi_code(ch).unwrap_or(b'?'))
        .collect()
}

// advance widths for codes 32..=255, one row per 16 codes, from the Adobe Core14
// AFM files Helvetica.afm and Helvetica-Bold.afm
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: Pt, b: f32) -> bool {
        (a.0 - b).abs() < 1e-3
    }

    #[test]
    fn measures_ascii_with_afm_widths() {
        // H e l l o = 722 + 556 + 222 + 222 + 556
        let width = BuiltinFont::Helvetica.width_of("Hello", Pt(12.0));
        assert!(close(width, 27.336), "got {width}");

        // bold: 722 + 556 + 278 + 278 + 611
        let width = BuiltinFont::HelveticaBold.width_of("Hello", Pt(10.0));
        assert!(close(width, 24.45), "got {width}");
    }

    #[test]
    fn oblique_shares_upright_widths() {
        let text = "¡Hola! Mi nombre es Ana Pérez";
        assert_eq!(
            BuiltinFont::Helvetica.width_of(text, Pt(14.0)),
            BuiltinFont::HelveticaOblique.width_of(text, Pt(14.0))
        );
    }

    #[test]
    fn spanish_characters_are_in_win_ansi() {
        assert_eq!(win_ansi_code('ñ'), Some(0xf1));
        assert_eq!(win_ansi_code('¡'), Some(0xa1));
        assert_eq!(win_ansi_code('é'), Some(0xe9));
        assert_eq!(encode_win_ansi("años"), vec![b'a', 0xf1, b'o', b's']);
    }

    #[test]
    fn unmapped_characters_become_question_marks() {
        assert_eq!(win_ansi_code('漢'), None);
        assert_eq!(encode_win_ansi("a漢b"), b"a?b".to_vec());
        assert_eq!(
            BuiltinFont::Helvetica.width_of("漢", Pt(10.0)),
            BuiltinFont::Helvetica.width_of("?", Pt(10.0))
        );
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        assert!(close(BuiltinFont::Helvetica.ascent(Pt(10.0)), 7.18));
        assert!(close(BuiltinFont::HelveticaOblique.descent(Pt(14.0)), -2.898));
    }

    #[test]
    fn widths_scale_linearly_with_size() {
        let small = BuiltinFont::HelveticaBold.width_of("Nombre:", Pt(10.0));
        let large = BuiltinFont::HelveticaBold.width_of("Nombre:", Pt(20.0));
        assert!(close(large, small.0 * 2.0));
    }
}
