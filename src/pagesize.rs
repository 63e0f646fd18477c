//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! The presentation renderer defaults to [LETTER]; the others can be selected by
//! name from the configuration file through [by_name].

use crate::units::*;
use crate::Error;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(13.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Look up a page size by its (case-insensitive) name, e.g. `"letter"` or `"A4"`
pub fn by_name(name: &str) -> Result<PageSize, Error> {
    match name.trim().to_ascii_lowercase().as_str() {
        "letter" => Ok(LETTER),
        "half-letter" | "half_letter" => Ok(HALF_LETTER),
        "legal" => Ok(LEGAL),
        "a4" => Ok(A4),
        "a5" => Ok(A5),
        _ => Err(Error::UnknownPageSize(name.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn letter_is_612_by_792() {
        assert_eq!(LETTER, (Pt(612.0), Pt(792.0)));
        assert_eq!(by_name("Letter").expect("known size"), LETTER);
    }

    #[test]
    fn unknown_sizes_are_rejected() {
        assert!(matches!(by_name("B5"), Err(Error::UnknownPageSize(_))));
    }
}
