//! Renderer configuration.
//!
//! Every value has a default matching the stock presentation layout, so an empty
//! (or absent) configuration file renders the standard document. A TOML file can
//! override any subset:
//!
//! ```toml
//! [page]
//! size = "a4"
//!
//! [colours]
//! accent = "#059669"
//!
//! [fonts]
//! regular = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
//!
//! [text]
//! title = "Personal Introduction"
//! message = "Hello! My name is {name}, I am {age} years old and I am passionate about {activity}."
//! ```

use crate::font::{BuiltinFont, Font};
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};
use crate::{Colour, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    page: PageSection,
    colours: ColourSection,
    fonts: FontSection,
    text: TextSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PageSection {
    size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ColourSection {
    header: Option<String>,
    title: Option<String>,
    accent: Option<String>,
    text: Option<String>,
    footer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FontSection {
    regular: Option<PathBuf>,
    bold: Option<PathBuf>,
    oblique: Option<PathBuf>,
    title_size: Option<Pt>,
    field_size: Option<Pt>,
    message_size: Option<Pt>,
    footer_size: Option<Pt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TextSection {
    title: Option<String>,
    name_label: Option<String>,
    age_label: Option<String>,
    activity_label: Option<String>,
    age_value: Option<String>,
    message: Option<String>,
    footer: Option<String>,
}

/// Colours used by the presentation layout
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Fill of the header band
    pub header: Colour,
    /// Title text
    pub title: Colour,
    /// Decorative rule and field labels
    pub accent: Colour,
    /// Field values and the message
    pub text: Colour,
    /// Footer caption
    pub footer: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            header: Colour::new_rgb_bytes(0xef, 0xf6, 0xff),
            title: Colour::new_rgb_bytes(0x1e, 0x3a, 0x8a),
            accent: Colour::new_rgb_bytes(0x3b, 0x82, 0xf6),
            text: Colour::new_rgb_bytes(0x1f, 0x29, 0x37),
            footer: Colour::new_rgb_bytes(0x9c, 0xa3, 0xaf),
        }
    }
}

/// Where a font comes from. Embedded faces are read and validated when the
/// configuration is loaded, so rendering never touches the file system.
#[derive(Debug, Clone, PartialEq)]
pub enum FontFace {
    Builtin(BuiltinFont),
    Embedded(Arc<[u8]>),
}

impl FontFace {
    /// Read and parse a TrueType / OpenType file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FontFace, Error> {
        let bytes = std::fs::read(path.as_ref())?;
        // parse once up front so a bad file fails here rather than mid-render
        Font::load(bytes.clone())?;
        Ok(FontFace::Embedded(bytes.into()))
    }

    pub(crate) fn to_font(&self) -> Result<Font, Error> {
        match self {
            FontFace::Builtin(font) => Ok(Font::builtin(*font)),
            FontFace::Embedded(bytes) => Font::load(bytes.to_vec()),
        }
    }
}

/// The three faces the layout draws with, and their sizes
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub regular: FontFace,
    pub bold: FontFace,
    pub oblique: FontFace,
    pub title_size: Pt,
    pub field_size: Pt,
    pub message_size: Pt,
    pub footer_size: Pt,
}

impl Default for Typography {
    fn default() -> Self {
        Typography {
            regular: FontFace::Builtin(BuiltinFont::Helvetica),
            bold: FontFace::Builtin(BuiltinFont::HelveticaBold),
            oblique: FontFace::Builtin(BuiltinFont::HelveticaOblique),
            title_size: Pt(32.0),
            field_size: Pt(20.0),
            message_size: Pt(14.0),
            footer_size: Pt(10.0),
        }
    }
}

/// Fixed strings drawn on the page. `age_value` and `message` are templates; the
/// placeholders `{name}`, `{age}` and `{activity}` are substituted at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Strings {
    pub title: String,
    pub name_label: String,
    pub age_label: String,
    pub activity_label: String,
    pub age_value: String,
    pub message: String,
    pub footer: String,
}

impl Default for Strings {
    fn default() -> Self {
        Strings {
            title: "Presentación Personal".to_string(),
            name_label: "Nombre:".to_string(),
            age_label: "Edad:".to_string(),
            activity_label: "Deporte Favorito:".to_string(),
            age_value: "{age} años".to_string(),
            message:
                "¡Hola! Mi nombre es {name}, tengo {age} años y me apasiona el {activity}."
                    .to_string(),
            footer: "Generado con Rust + pdf-writer".to_string(),
        }
    }
}

/// Fixed layout constants, measured down from the top of the page unless noted.
/// The label column is a fixed width: values start at `value_column`, or at
/// `wide_value_column` for the activity whose label is the longest.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub header_height: Pt,
    pub title_baseline: Pt,
    pub rule_offset: Pt,
    pub rule_width: Pt,
    /// Left and right page margin; also bounds the rule and the message width
    pub side_margin: Pt,
    /// Bottom page margin, where the footer baseline sits
    pub bottom_margin: Pt,
    pub first_field: Pt,
    pub field_step: Pt,
    pub value_column: Pt,
    pub wide_value_column: Pt,
    /// Gap between the last field and the first message line
    pub message_gap: Pt,
    pub message_line_step: Pt,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            header_height: In(2.0).into(),
            title_baseline: In(1.0).into(),
            rule_offset: In(1.5).into(),
            rule_width: Pt(3.0),
            side_margin: In(1.5).into(),
            bottom_margin: In(0.5).into(),
            first_field: In(3.0).into(),
            field_step: In(0.8).into(),
            value_column: In(3.0).into(),
            wide_value_column: In(4.2).into(),
            message_gap: In(1.5).into(),
            message_line_step: In(0.3).into(),
        }
    }
}

/// Everything the [crate::DocumentRenderer] needs besides the three input fields
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub page_size: PageSize,
    pub palette: Palette,
    pub typography: Typography,
    pub strings: Strings,
    pub geometry: Geometry,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            page_size: pagesize::LETTER,
            palette: Palette::default(),
            typography: Typography::default(),
            strings: Strings::default(),
            geometry: Geometry::default(),
        }
    }
}

fn override_colour(target: &mut Colour, hex: Option<String>) -> Result<(), Error> {
    if let Some(hex) = hex {
        *target = Colour::from_hex(&hex)?;
    }
    Ok(())
}

fn override_value<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn resolve_path(base: Option<&Path>, path: PathBuf) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

impl RenderConfig {
    /// Load a configuration file. Relative font paths are resolved against the
    /// directory containing the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RenderConfig, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded render configuration");
        RenderConfig::from_toml(&contents, path.parent())
    }

    /// Parse a configuration from TOML text. Relative font paths are resolved
    /// against the current working directory.
    pub fn from_toml_str(contents: &str) -> Result<RenderConfig, Error> {
        RenderConfig::from_toml(contents, None)
    }

    fn from_toml(contents: &str, base: Option<&Path>) -> Result<RenderConfig, Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = RenderConfig::default();

        if let Some(size) = file.page.size {
            config.page_size = pagesize::by_name(&size)?;
        }

        let palette = &mut config.palette;
        override_colour(&mut palette.header, file.colours.header)?;
        override_colour(&mut palette.title, file.colours.title)?;
        override_colour(&mut palette.accent, file.colours.accent)?;
        override_colour(&mut palette.text, file.colours.text)?;
        override_colour(&mut palette.footer, file.colours.footer)?;

        let typography = &mut config.typography;
        if let Some(path) = file.fonts.regular {
            typography.regular = FontFace::from_file(resolve_path(base, path))?;
        }
        if let Some(path) = file.fonts.bold {
            typography.bold = FontFace::from_file(resolve_path(base, path))?;
        }
        if let Some(path) = file.fonts.oblique {
            typography.oblique = FontFace::from_file(resolve_path(base, path))?;
        }
        override_value(&mut typography.title_size, file.fonts.title_size);
        override_value(&mut typography.field_size, file.fonts.field_size);
        override_value(&mut typography.message_size, file.fonts.message_size);
        override_value(&mut typography.footer_size, file.fonts.footer_size);

        let strings = &mut config.strings;
        override_value(&mut strings.title, file.text.title);
        override_value(&mut strings.name_label, file.text.name_label);
        override_value(&mut strings.age_label, file.text.age_label);
        override_value(&mut strings.activity_label, file.text.activity_label);
        override_value(&mut strings.age_value, file.text.age_value);
        override_value(&mut strings.message, file.text.message);
        override_value(&mut strings.footer, file.text.footer);

        Ok(config)
    }
}
