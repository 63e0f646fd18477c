use lopdf::Document as LoDocument;
use pdf_presentation::{DocumentRenderer, Download, PresentationRequest, RenderConfig};

fn render(name: &str, age: u8, activity: &str) -> Vec<u8> {
    DocumentRenderer::default()
        .render(name, age, activity)
        .expect("render succeeds")
}

fn page_content(bytes: &[u8]) -> Vec<u8> {
    let doc = LoDocument::load_mem(bytes).expect("output parses as a PDF");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "presentation has exactly one page");
    let (_, page_id) = pages.into_iter().next().expect("one page");
    let content = doc.get_page_content(page_id).expect("page has content");
    // content streams are Flate-compressed; inflate them unless lopdf already did
    miniz_oxide::inflate::decompress_to_vec_zlib(&content).unwrap_or(content)
}

// text is shown as hex-encoded WinAnsi bytes
fn shown_text(text: &str) -> Vec<u8> {
    let hex: String = text
        .chars()
        .map(|ch| pdf_presentation::win_ansi_code(ch).unwrap_or(b'?'))
        .map(|byte| format!("{byte:02x}"))
        .collect();
    format!("<{hex}> Tj").into_bytes()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn renders_a_single_page_pdf() {
    let bytes = render("Ana Pérez", 30, "Tenis");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));

    let content = page_content(&bytes);
    assert!(contains(&content, &shown_text("Presentación Personal")));
    assert!(contains(&content, &shown_text("Ana Pérez")));
    assert!(contains(&content, &shown_text("30 años")));
    assert!(contains(&content, &shown_text("Tenis")));
}

#[test]
fn rendering_is_deterministic() {
    let first = render("Ana Pérez", 30, "Tenis");
    let second = render("Ana Pérez", 30, "Tenis");
    assert_eq!(first, second);
}

#[test]
fn different_inputs_give_different_documents() {
    assert_ne!(render("Ana Pérez", 30, "Tenis"), render("Ana Pérez", 31, "Tenis"));
}

#[test]
fn age_bounds_render_in_full() {
    let content = page_content(&render("Ana", 1, "Surf"));
    assert!(contains(&content, &shown_text("1 años")));

    let content = page_content(&render("Ana", 100, "Surf"));
    assert!(contains(&content, &shown_text("100 años")));
}

#[test]
fn example_sentence_is_preserved_by_wrapping() {
    let lines = DocumentRenderer::default()
        .message_lines("Ana Pérez", 30, "Tenis")
        .expect("builtin fonts load");
    assert_eq!(
        lines.join(" "),
        "¡Hola! Mi nombre es Ana Pérez, tengo 30 años y me apasiona el Tenis."
    );

    let content = page_content(&render("Ana Pérez", 30, "Tenis"));
    for line in lines.iter() {
        assert!(contains(&content, &shown_text(line)), "{line:?} is drawn");
    }
}

#[test]
fn other_activity_text_flows_into_field_and_sentence() {
    let request =
        PresentationRequest::new("Ana Pérez", 30, "Otro", Some("Ajedrez")).expect("valid");
    let renderer = DocumentRenderer::default();
    let bytes = renderer.render_request(&request).expect("render succeeds");

    let content = page_content(&bytes);
    assert!(contains(&content, &shown_text("Ajedrez")));

    let lines = renderer
        .message_lines("Ana Pérez", 30, "Ajedrez")
        .expect("builtin fonts load");
    assert!(lines.join(" ").ends_with("me apasiona el Ajedrez."));
}

#[test]
fn blank_names_never_reach_the_renderer() {
    let errors = PresentationRequest::new("   ", 30, "Tenis", None).unwrap_err();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["Por favor, ingresa tu nombre"]);
}

#[test]
fn download_uses_the_name_in_the_file_name() {
    let request = PresentationRequest::new("Ana Pérez", 30, "Tenis", None).expect("valid");
    let bytes = DocumentRenderer::default()
        .render_request(&request)
        .expect("render succeeds");
    let download = Download::for_request(&request, bytes);
    assert_eq!(download.file_name, "presentacion_Ana_Pérez.pdf");
    assert_eq!(download.mime_type, "application/pdf");
}

#[test]
fn overflowing_messages_stay_on_one_page() {
    let long_activity = "Skateboarding ".repeat(120);
    let bytes = render("Ana", 30, long_activity.trim());
    page_content(&bytes);
}

#[test]
fn configured_page_size_is_used() {
    let config = RenderConfig::from_toml_str("[page]\nsize = \"a4\"").expect("config parses");
    let bytes = DocumentRenderer::new(config)
        .render("Ana", 30, "Surf")
        .expect("render succeeds");
    let doc = LoDocument::load_mem(&bytes).expect("output parses as a PDF");
    let (_, page_id) = doc.get_pages().into_iter().next().expect("one page");
    let page = doc
        .get_dictionary(page_id)
        .expect("page is a dictionary");
    let media_box = page
        .get(b"MediaBox")
        .and_then(|object| object.as_array())
        .expect("page has a media box");
    let width = media_box[2].as_float().expect("numeric width");
    assert!((width - 595.2756).abs() < 0.01, "got {width}");
}

const MONO_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf");

fn embedded_renderer() -> DocumentRenderer {
    let config = RenderConfig::from_toml_str(&format!(
        "[fonts]\nregular = '{MONO_FONT}'\nbold = '{MONO_FONT}'\noblique = '{MONO_FONT}'"
    ))
    .expect("config with embedded fonts parses");
    DocumentRenderer::new(config)
}

#[test]
fn embedded_fonts_render_as_type0_fonts() {
    let renderer = embedded_renderer();
    let bytes = renderer
        .render("Łukasz Żółć", 30, "Tenis")
        .expect("render succeeds");
    assert_eq!(
        bytes,
        renderer
            .render("Łukasz Żółć", 30, "Tenis")
            .expect("render succeeds"),
        "embedded rendering is deterministic"
    );

    // glyph ids in the fixture font, two bytes each
    let content = page_content(&bytes);
    assert!(contains(&content, b"<01030058004e00440056005d0003013d00b5010400c9> Tj"));
    assert!(contains(&content, b"<003700480051004c0056> Tj"));

    let doc = LoDocument::load_mem(&bytes).expect("output parses as a PDF");
    let (_, page_id) = doc.get_pages().into_iter().next().expect("one page");
    let fonts = doc.get_page_fonts(page_id);
    assert_eq!(fonts.len(), 3);
    for font in fonts.values() {
        assert_eq!(font.get(b"Subtype").and_then(|o| o.as_name()).ok(), Some(&b"Type0"[..]));
        assert_eq!(
            font.get(b"Encoding").and_then(|o| o.as_name()).ok(),
            Some(&b"Identity-H"[..])
        );
        assert!(font.has(b"ToUnicode"));

        let descendants = font
            .get(b"DescendantFonts")
            .and_then(|o| o.as_array())
            .expect("type0 fonts have a descendant");
        let cid_font = doc
            .get_dictionary(descendants[0].as_reference().expect("indirect descendant"))
            .expect("descendant is a dictionary");
        assert_eq!(
            cid_font.get(b"Subtype").and_then(|o| o.as_name()).ok(),
            Some(&b"CIDFontType2"[..])
        );
        let descriptor = doc
            .get_dictionary(
                cid_font
                    .get(b"FontDescriptor")
                    .and_then(|o| o.as_reference())
                    .expect("descriptor reference"),
            )
            .expect("descriptor is a dictionary");
        assert!(descriptor.has(b"FontFile2"));
    }
}

#[test]
fn embedded_metrics_drive_the_wrapping() {
    let renderer = embedded_renderer();
    let lines = renderer
        .message_lines("Łukasz Żółć", 30, "Tenis")
        .expect("embedded fonts load");
    assert_eq!(
        lines.join(" "),
        "¡Hola! Mi nombre es Łukasz Żółć, tengo 30 años y me apasiona el Tenis."
    );

    // every glyph of the monospaced fixture is 1233/2048 em wide
    let char_width = 14.0 * 1233.0 / 2048.0;
    for line in lines.iter() {
        let width = line.chars().count() as f32 * char_width;
        assert!(width < renderer.message_width().0, "{line:?} is too wide");
    }
    assert_eq!(
        lines,
        vec!["¡Hola! Mi nombre es Łukasz Żółć, tengo 30 años", "y me apasiona el Tenis."]
    );
}
