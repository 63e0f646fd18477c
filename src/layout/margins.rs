use crate::units::Pt;

/// Margins are used when laying out objects on a page. There is no control
/// preventing objects on pages to overflow the margins; the margins are there
/// as guidelines for layout functions. Additionally, the margins are applied
/// to [`Page`](crate::Page)s to determine the `ArtBox` attribute of each page in the
/// generated PDF
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<D: Into<Pt>>(vertical: D, horizontal: D) -> Margins {
        let vertical: Pt = vertical.into();
        let horizontal: Pt = horizontal.into();
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{pagesize, In, Page};

    #[test]
    fn margins_shrink_the_content_box() {
        let page = Page::new(
            pagesize::LETTER,
            Some(Margins::symmetric(In(0.5), In(1.5))),
        );
        assert_eq!(page.content_box.x1, Pt(108.0));
        assert_eq!(page.content_box.x2, Pt(504.0));
        assert_eq!(page.content_box.y1, Pt(36.0));
        assert_eq!(page.content_box.y2, Pt(756.0));
    }
}
