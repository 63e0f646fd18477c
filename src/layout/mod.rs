//! Text layout utilities for positioning content on pages.
//!
//! This module provides tools for measuring text with real font metrics, centring
//! it, and breaking it into lines with greedy word wrapping. Layout never paginates:
//! content that runs past the bottom of a page is left for the caller to deal with.
//!
//! # Example
//!
//! ```
//! use pdf_presentation::{BuiltinFont, Document, Pt};
//! use pdf_presentation::layout::{width_of_text, wrap_text};
//!
//! let mut doc = Document::default();
//! let helvetica = doc.add_font(BuiltinFont::Helvetica);
//!
//! let lines = wrap_text("the quick brown fox jumps", &doc.fonts[helvetica], Pt(12.0), Pt(80.0));
//! for line in lines.iter() {
//!     assert!(width_of_text(line, &doc.fonts[helvetica], Pt(12.0)) < Pt(80.0));
//! }
//! assert_eq!(lines.join(" "), "the quick brown fox jumps");
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
