use crate::config::RenderConfig;
use crate::layout::{self, Margins};
use crate::page::{Page, Shape, SpanFont, SpanLayout};
use crate::request::PresentationRequest;
use crate::{Document, Error, Font, Info, Pt, Rect};
use id_arena::Id;

/// Substitute `{name}`, `{age}` and `{activity}` in `template`. Substituted values
/// are never re-scanned, so a name that happens to contain `{age}` stays literal.
pub fn fill_template(template: &str, full_name: &str, age: u8, activity: &str) -> String {
    let age = age.to_string();
    let mut out = String::with_capacity(template.len() + full_name.len() + activity.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let (value, len) = if tail.starts_with("{name}") {
            (full_name, "{name}".len())
        } else if tail.starts_with("{age}") {
            (age.as_str(), "{age}".len())
        } else if tail.starts_with("{activity}") {
            (activity, "{activity}".len())
        } else {
            ("{", 1)
        };
        out.push_str(value);
        rest = &tail[len..];
    }
    out.push_str(rest);
    out
}

/// The lowest baseline a message line can sit on before its descenders reach the
/// top of the footer text
fn message_floor(footer: (&Font, Pt), message: (&Font, Pt), footer_baseline: Pt) -> Pt {
    let (footer_font, footer_size) = footer;
    let (message_font, message_size) = message;
    footer_baseline + footer_font.ascent(footer_size) - message_font.descent(message_size)
}

struct Faces {
    regular: Id<Font>,
    bold: Id<Font>,
    oblique: Id<Font>,
}

/// Renders the one-page personal presentation.
///
/// The renderer only reads its [RenderConfig]; every call builds a fresh
/// [Document], so one renderer can serve any number of requests (and threads).
/// Output is a pure function of the inputs: the same name, age and activity always
/// produce byte-identical PDFs.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    config: RenderConfig,
}

impl DocumentRenderer {
    pub fn new(config: RenderConfig) -> DocumentRenderer {
        DocumentRenderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The narrative sentence drawn beneath the fields
    pub fn message(&self, full_name: &str, age: u8, activity: &str) -> String {
        fill_template(&self.config.strings.message, full_name, age, activity)
    }

    /// The message as it will be wrapped on the page
    pub fn message_lines(
        &self,
        full_name: &str,
        age: u8,
        activity: &str,
    ) -> Result<Vec<String>, Error> {
        let font = self.config.typography.oblique.to_font()?;
        Ok(layout::wrap_text(
            &self.message(full_name, age, activity),
            &font,
            self.config.typography.message_size,
            self.message_width(),
        ))
    }

    /// Widest a message line may be: the page width less both side margins
    pub fn message_width(&self) -> Pt {
        self.config.page_size.0 - self.config.geometry.side_margin * 2.0
    }

    /// Render a validated request
    pub fn render_request(&self, request: &PresentationRequest) -> Result<Vec<u8>, Error> {
        self.render(
            request.full_name(),
            request.age(),
            request.activity().as_str(),
        )
    }

    /// Render the presentation and serialize it to PDF bytes. Inputs are assumed to
    /// be valid (see [PresentationRequest::new]).
    pub fn render(&self, full_name: &str, age: u8, activity: &str) -> Result<Vec<u8>, Error> {
        let document = self.build_document(full_name, age, activity)?;
        let mut out: Vec<u8> = Vec::new();
        document.write(&mut out)?;
        tracing::debug!(bytes = out.len(), "rendered presentation");
        Ok(out)
    }

    /// Lay out the single page without serializing it
    pub fn build_document(
        &self,
        full_name: &str,
        age: u8,
        activity: &str,
    ) -> Result<Document, Error> {
        let typography = &self.config.typography;
        let mut doc = Document::default();
        let faces = Faces {
            regular: doc.add_font(typography.regular.to_font()?),
            bold: doc.add_font(typography.bold.to_font()?),
            oblique: doc.add_font(typography.oblique.to_font()?),
        };

        let mut info = Info::new();
        info.title(&self.config.strings.title).author(full_name);
        doc.set_info(info);

        let page = self.layout_page(&doc, &faces, full_name, age, activity);
        doc.add_page(page);
        Ok(doc)
    }

    fn layout_page(
        &self,
        doc: &Document,
        faces: &Faces,
        full_name: &str,
        age: u8,
        activity: &str,
    ) -> Page {
        let RenderConfig {
            page_size,
            palette,
            typography,
            strings,
            geometry,
        } = &self.config;

        let mut page = Page::new(
            *page_size,
            Some(Margins::symmetric(geometry.bottom_margin, geometry.side_margin)),
        );
        let width = page.width();
        let top = page.height();
        let centre = width / 2.0;
        let left = page.content_box.x1;

        // header band
        page.add_shape(Shape::FilledRect {
            rect: Rect::from_origin(
                Pt(0.0),
                top - geometry.header_height,
                width,
                geometry.header_height,
            ),
            colour: palette.header,
        });

        let bold = SpanFont {
            id: faces.bold,
            size: typography.title_size,
        };
        page.add_span(SpanLayout {
            text: strings.title.clone(),
            font: bold,
            colour: palette.title,
            coords: (
                layout::centred_start(centre, &strings.title, &doc.fonts[faces.bold], bold.size),
                top - geometry.title_baseline,
            ),
        });

        let rule_y = top - geometry.rule_offset;
        page.add_shape(Shape::Line {
            from: (left, rule_y),
            to: (page.content_box.x2, rule_y),
            colour: palette.accent,
            width: geometry.rule_width,
        });

        // label / value pairs
        let label_font = SpanFont {
            id: faces.bold,
            size: typography.field_size,
        };
        let value_font = SpanFont {
            id: faces.regular,
            size: typography.field_size,
        };
        let age_value = fill_template(&strings.age_value, full_name, age, activity);
        let fields = [
            (&strings.name_label, full_name, geometry.value_column),
            (&strings.age_label, age_value.as_str(), geometry.value_column),
            (&strings.activity_label, activity, geometry.wide_value_column),
        ];

        let mut y = top - geometry.first_field;
        let mut field_spans = Vec::with_capacity(fields.len() * 2);
        for (i, (label, value, value_x)) in fields.into_iter().enumerate() {
            if i > 0 {
                y -= geometry.field_step;
            }
            field_spans.push(SpanLayout {
                text: label.clone(),
                font: label_font,
                colour: palette.accent,
                coords: (left, y),
            });
            field_spans.push(SpanLayout {
                text: value.to_string(),
                font: value_font,
                colour: palette.text,
                coords: (value_x, y),
            });
        }
        page.add_spans(field_spans);

        // message
        let message = fill_template(&strings.message, full_name, age, activity);
        let oblique = &doc.fonts[faces.oblique];
        let lines = layout::wrap_text(
            &message,
            oblique,
            typography.message_size,
            page.content_box.width(),
        );
        let last_baseline = layout::layout_centred_lines(
            &mut page,
            &lines,
            (
                SpanFont {
                    id: faces.oblique,
                    size: typography.message_size,
                },
                oblique,
            ),
            palette.text,
            centre,
            y - geometry.message_gap,
            geometry.message_line_step,
        );
        let footer_y = page.content_box.y1;
        let floor = message_floor(
            (&doc.fonts[faces.regular], typography.footer_size),
            (oblique, typography.message_size),
            footer_y,
        );
        if !lines.is_empty() && last_baseline < floor {
            tracing::warn!(
                lines = lines.len(),
                baseline = last_baseline.0,
                floor = floor.0,
                "message runs into the footer"
            );
        }

        // footer
        page.add_span(SpanLayout {
            text: strings.footer.clone(),
            font: SpanFont {
                id: faces.regular,
                size: typography.footer_size,
            },
            colour: palette.footer,
            coords: (
                layout::centred_start(
                    centre,
                    &strings.footer,
                    &doc.fonts[faces.regular],
                    typography.footer_size,
                ),
                footer_y,
            ),
        });

        tracing::debug!(message_lines = lines.len(), "laid out presentation page");
        page
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::width_of_text;
    use crate::page::PageContents;
    use crate::BuiltinFont;

    fn spans(doc: &Document) -> Vec<SpanLayout> {
        let page = &doc.pages[doc.page_order[0]];
        page.contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(spans.clone()),
                PageContents::Shape(_) => None,
            })
            .flatten()
            .collect()
    }

    fn span_with_text(doc: &Document, text: &str) -> SpanLayout {
        spans(doc)
            .into_iter()
            .find(|span| span.text == text)
            .unwrap_or_else(|| panic!("no span {text:?}"))
    }

    #[test]
    fn templates_fill_every_placeholder() {
        assert_eq!(
            fill_template("{name} ({age}) likes {activity}", "Ana", 30, "Surf"),
            "Ana (30) likes Surf"
        );
        assert_eq!(fill_template("{unknown} {", "Ana", 30, "Surf"), "{unknown} {");
    }

    #[test]
    fn template_values_are_not_rescanned() {
        assert_eq!(
            fill_template("{name} / {age}", "{age}", 7, "x"),
            "{age} / 7"
        );
    }

    #[test]
    fn example_message_wraps_losslessly() {
        let renderer = DocumentRenderer::default();
        let lines = renderer
            .message_lines("Ana Pérez", 30, "Tenis")
            .expect("builtin fonts load");
        assert_eq!(
            lines.join(" "),
            "¡Hola! Mi nombre es Ana Pérez, tengo 30 años y me apasiona el Tenis."
        );
        let font = Font::builtin(BuiltinFont::HelveticaOblique);
        for line in lines.iter() {
            assert!(width_of_text(line, &font, Pt(14.0)) < renderer.message_width());
        }
    }

    #[test]
    fn message_width_is_page_less_margins() {
        assert_eq!(DocumentRenderer::default().message_width(), Pt(396.0));
    }

    #[test]
    fn fields_are_drawn_at_fixed_positions() {
        let doc = DocumentRenderer::default()
            .build_document("Ana Pérez", 30, "Tenis")
            .expect("can lay out");

        let name_label = span_with_text(&doc, "Nombre:");
        assert_eq!(name_label.coords, (Pt(108.0), Pt(576.0)));
        let name = span_with_text(&doc, "Ana Pérez");
        assert_eq!(name.coords, (Pt(216.0), Pt(576.0)));

        let age = span_with_text(&doc, "30 años");
        assert_eq!(age.coords.0, Pt(216.0));
        assert!((age.coords.1 .0 - 518.4).abs() < 1e-3);

        let activity = span_with_text(&doc, "Tenis");
        assert!((activity.coords.0 .0 - 302.4).abs() < 1e-3);
        assert!((activity.coords.1 .0 - 460.8).abs() < 1e-3);
    }

    #[test]
    fn labels_never_reach_their_values() {
        let renderer = DocumentRenderer::default();
        let config = renderer.config();
        let bold = Font::builtin(BuiltinFont::HelveticaBold);
        let size = config.typography.field_size;
        let left = config.geometry.side_margin;

        let strings = &config.strings;
        for label in [&strings.name_label, &strings.age_label] {
            assert!(left + width_of_text(label, &bold, size) < config.geometry.value_column);
        }
        assert!(
            left + width_of_text(&strings.activity_label, &bold, size)
                < config.geometry.wide_value_column
        );
    }

    #[test]
    fn message_starts_below_the_fields() {
        let doc = DocumentRenderer::default()
            .build_document("Ana Pérez", 30, "Tenis")
            .expect("can lay out");
        let first_line = spans(&doc)
            .into_iter()
            .find(|span| span.text.starts_with("¡Hola!"))
            .expect("message is drawn");
        // last field at 460.8, then a 108pt gap
        assert!((first_line.coords.1 .0 - 352.8).abs() < 1e-3);
    }

    #[test]
    fn title_and_footer_are_centred() {
        let renderer = DocumentRenderer::default();
        let doc = renderer
            .build_document("Ana Pérez", 30, "Tenis")
            .expect("can lay out");

        let title = span_with_text(&doc, "Presentación Personal");
        let width = width_of_text(
            "Presentación Personal",
            &Font::builtin(BuiltinFont::HelveticaBold),
            Pt(32.0),
        );
        assert_eq!(title.coords, (Pt(306.0) - width / 2.0, Pt(720.0)));

        let footer = span_with_text(&doc, &renderer.config().strings.footer);
        assert_eq!(footer.coords.1, Pt(36.0));
    }

    #[test]
    fn message_floor_clears_the_footer_text() {
        let regular = Font::builtin(BuiltinFont::Helvetica);
        let oblique = Font::builtin(BuiltinFont::HelveticaOblique);
        let floor = message_floor((&regular, Pt(10.0)), (&oblique, Pt(14.0)), Pt(36.0));
        // 36 + 718/1000 * 10 + 207/1000 * 14
        assert!((floor.0 - 46.078).abs() < 1e-3, "got {floor}");
        // a baseline above the footer's but inside its ascent still collides
        assert!(Pt(40.0) < floor);
    }

    #[test]
    fn fields_share_one_text_run() {
        let doc = DocumentRenderer::default()
            .build_document("Ana Pérez", 30, "Tenis")
            .expect("can lay out");
        let page = &doc.pages[doc.page_order[0]];
        let field_run = page
            .contents
            .iter()
            .find_map(|content| match content {
                PageContents::Text(spans) if spans.len() > 1 && spans[0].text == "Nombre:" => {
                    Some(spans)
                }
                _ => None,
            })
            .expect("fields are drawn as one run");
        let texts: Vec<&str> = field_run.iter().map(|span| span.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Nombre:", "Ana Pérez", "Edad:", "30 años", "Deporte Favorito:", "Tenis"]
        );
    }

    #[test]
    fn exactly_one_page_even_when_the_message_overflows() {
        let long_activity = "muy ".repeat(400);
        let doc = DocumentRenderer::default()
            .build_document("Ana", 30, long_activity.trim())
            .expect("can lay out");
        assert_eq!(doc.page_order.len(), 1);
    }
}
