//! Fonts that can be placed on a page and measured for layout.
//!
//! Two kinds of font are supported:
//!
//! - [BuiltinFont]s are the standard-14 Helvetica family. They are never embedded;
//!   every conforming PDF reader ships them, and their advance widths are compiled
//!   into this crate so text can be measured without any font files.
//! - [TrueTypeFont]s are parsed from TTF / OTF bytes and embedded in their entirety.
//!
//! Typically, fonts are referred to throughout user applications by their _id_ within
//! the [crate::Document] itself, and not by any typed references.

mod builtin;
mod truetype;

pub use builtin::*;
pub use truetype::*;

use crate::refs::ObjectReferences;
use crate::units::Pt;
use crate::Error;
use id_arena::Id;
use pdf_writer::Pdf;

/// A font that has been added to (or will be added to) a [crate::Document]
pub enum Font {
    Builtin(BuiltinFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Use one of the standard-14 fonts
    pub fn builtin(font: BuiltinFont) -> Font {
        Font::Builtin(font)
    }

    /// Load a TrueType / OpenType font from raw bytes, parsing the font and returning
    /// an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    /// The rendered width of `text` at the given size, in points
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Builtin(font) => font.width_of(text, size),
            Font::TrueType(font) => font.width_of(text, size),
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        match self {
            Font::Builtin(font) => font.ascent(size),
            Font::TrueType(font) => font.ascent(size),
        }
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        match self {
            Font::Builtin(font) => font.descent(size),
            Font::TrueType(font) => font.descent(size),
        }
    }

    /// Encode `text` into the byte string a `Tj` operator expects for this font
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Builtin(_) => builtin::encode_win_ansi(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        match self {
            Font::Builtin(font) => font.write(refs, id.index(), writer),
            Font::TrueType(font) => font.write(refs, id.index(), writer),
        }
    }
}

impl From<BuiltinFont> for Font {
    fn from(font: BuiltinFont) -> Self {
        Font::Builtin(font)
    }
}
