use thiserror::Error;

/// All errors that the crate can generate while building or writing a document
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse an embedded font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid colour {0:?}, expected a hex string like \"#1E3A8A\"")]
    /// A colour string could not be parsed
    InvalidColour(String),

    #[error("unknown page size {0:?}")]
    /// A page size name is not one of the known [crate::pagesize] names
    UnknownPageSize(String),

    #[error("invalid configuration: {0}")]
    /// The TOML configuration could not be deserialized
    Config(#[from] toml::de::Error),

    #[error("page {0} is missing from the document")]
    /// The page order refers to a page that is no longer in the arena
    PageMissing(usize),
}
