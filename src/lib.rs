//! Renders a one-page personal presentation PDF from a name, an age and a
//! favourite sport.
//!
//! ```
//! use pdf_presentation::{DocumentRenderer, Download, PresentationRequest};
//!
//! let request = PresentationRequest::new("Ana Pérez", 30, "Tenis", None).expect("valid form");
//! let bytes = DocumentRenderer::default().render_request(&request).expect("can render");
//! let download = Download::for_request(&request, bytes);
//!
//! assert!(download.bytes.starts_with(b"%PDF-"));
//! assert_eq!(download.file_name, "presentacion_Ana_Pérez.pdf");
//! ```

mod colour;
pub use colour::*;

/// Renderer configuration, with defaults for the stock layout
pub mod config;
pub use config::RenderConfig;

pub(crate) mod content;

mod document;
pub use document::*;

mod download;
pub use download::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod renderer;
pub use renderer::*;

mod request;
pub use request::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
