//! Flowing-Document Renderer: builds a DOCX package from classified lines.
//!
//! One body paragraph per classified line, after a leading `Title` paragraph. Word (or any
//! OOXML reader) handles reflow and pagination, so nothing here tracks position.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::classifier::{ClassifiedLine, LineKind};
use crate::document::ooxml::{
    CONTENT_TYPES, CONTENT_TYPES_PATH, CORE_PROPS_PATH, CORE_PROPS_TEMPLATE, DOCUMENT_PATH,
    DOCUMENT_RELS, DOCUMENT_RELS_PATH, DOCUMENT_TEMPLATE, HEADING1_STYLE_ID,
    LIST_BULLET_STYLE_ID, NUMBERING, NUMBERING_PATH, ROOT_RELS, ROOT_RELS_PATH, STYLES,
    STYLES_PATH, TITLE_STYLE_ID,
};
use crate::document::{title_for, RenderError};

/// Renders classified lines into DOCX bytes.
///
/// The package is assembled fully in memory; a zip failure aborts the whole render and no
/// partial archive is returned.
pub fn render_flowing(name: &str, lines: &[ClassifiedLine]) -> Result<Vec<u8>, RenderError> {
    let title = title_for(name);
    let document_xml = DOCUMENT_TEMPLATE.replace("{body}", &build_body(&title, lines));
    let core_xml = CORE_PROPS_TEMPLATE.replace("{title}", &escape_xml(&title));

    let parts: [(&str, &str); 7] = [
        (CONTENT_TYPES_PATH, CONTENT_TYPES),
        (ROOT_RELS_PATH, ROOT_RELS),
        (CORE_PROPS_PATH, &core_xml),
        (DOCUMENT_PATH, &document_xml),
        (DOCUMENT_RELS_PATH, DOCUMENT_RELS),
        (STYLES_PATH, STYLES),
        (NUMBERING_PATH, NUMBERING),
    ];

    // Fixed timestamp keeps output a pure function of the input.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, contents) in parts {
        zip.start_file(path, options)?;
        zip.write_all(contents.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Builds the `<w:body>` children: the title, then one paragraph per line.
fn build_body(title: &str, lines: &[ClassifiedLine]) -> String {
    let mut body = String::new();
    body.push_str(&styled_paragraph(Some(TITLE_STYLE_ID), title, false));

    for line in lines {
        let paragraph = match line.kind {
            LineKind::Heading => styled_paragraph(Some(HEADING1_STYLE_ID), &line.content, false),
            LineKind::Bullet => styled_paragraph(Some(LIST_BULLET_STYLE_ID), &line.content, true),
            LineKind::Paragraph => styled_paragraph(None, &line.content, false),
        };
        body.push_str(&paragraph);
    }

    body
}

fn styled_paragraph(style: Option<&str>, text: &str, numbered: bool) -> String {
    let mut xml = String::from("<w:p>");

    if style.is_some() || numbered {
        xml.push_str("<w:pPr>");
        if let Some(style) = style {
            xml.push_str(&format!("<w:pStyle w:val=\"{style}\"/>"));
        }
        if numbered {
            xml.push_str("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>");
        }
        xml.push_str("</w:pPr>");
    }

    // Empty paragraphs are still emitted so blank lines keep their spacing.
    if !text.is_empty() {
        xml.push_str("<w:r><w:t xml:space=\"preserve\">");
        xml.push_str(&escape_xml(text));
        xml.push_str("</w:t></w:r>");
    }

    xml.push_str("</w:p>");
    xml
}

/// Escapes XML markup characters and drops anything outside the XML 1.0 `Char` production.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push(' '),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Surrogates cannot occur in a `char`, so only the low controls and U+FFFE/U+FFFF remain
/// to exclude.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::classifier::classify;
    use std::io::Read;

    fn read_part(bytes: &[u8], path: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let mut file = archive.by_name(path).expect("part present");
        let mut contents = String::new();
        file.read_to_string(&mut contents).expect("utf-8 part");
        contents
    }

    /// Returns the `<w:p>...</w:p>` elements of the document body, in order.
    fn body_paragraphs(document_xml: &str) -> Vec<String> {
        let body_start = document_xml.find("<w:body>").expect("body") + "<w:body>".len();
        let body_end = document_xml.find("<w:sectPr>").expect("sectPr");
        document_xml[body_start..body_end]
            .split_inclusive("</w:p>")
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_first_element_is_title_with_name() {
        let bytes = render_flowing("Jane Doe", &classify("### Summary\n- Did X")).unwrap();
        assert!(!bytes.is_empty());

        let paragraphs = body_paragraphs(&read_part(&bytes, DOCUMENT_PATH));
        assert!(paragraphs[0].contains("<w:pStyle w:val=\"Title\"/>"));
        assert!(paragraphs[0].contains("Jane Doe&apos;s Resume"));
    }

    #[test]
    fn test_one_paragraph_per_line_in_order() {
        let lines = classify("### Summary\n- Did X\nPlain text\n");
        let bytes = render_flowing("Jane Doe", &lines).unwrap();
        let paragraphs = body_paragraphs(&read_part(&bytes, DOCUMENT_PATH));

        assert_eq!(paragraphs.len(), lines.len() + 1);
        assert!(paragraphs[1].contains("Heading1") && paragraphs[1].contains(">Summary<"));
        assert!(paragraphs[2].contains("ListBullet"));
        assert!(paragraphs[2].contains("<w:numId w:val=\"1\"/>"));
        assert!(paragraphs[2].contains(">Did X<"));
        assert!(!paragraphs[3].contains("<w:pPr>") && paragraphs[3].contains(">Plain text<"));
        assert_eq!(paragraphs[4], "<w:p></w:p>", "blank line kept as empty paragraph");
    }

    #[test]
    fn test_empty_input_renders() {
        let bytes = render_flowing("Jane Doe", &classify("")).unwrap();
        let paragraphs = body_paragraphs(&read_part(&bytes, DOCUMENT_PATH));
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_package_has_all_parts() {
        let bytes = render_flowing("Jane Doe", &[]).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for path in [
            CONTENT_TYPES_PATH,
            ROOT_RELS_PATH,
            CORE_PROPS_PATH,
            DOCUMENT_PATH,
            DOCUMENT_RELS_PATH,
            STYLES_PATH,
            NUMBERING_PATH,
        ] {
            assert!(names.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn test_core_properties_carry_title() {
        let bytes = render_flowing("A & B", &[]).unwrap();
        let core = read_part(&bytes, CORE_PROPS_PATH);
        assert!(core.contains("<dc:title>A &amp; B&apos;s Resume</dc:title>"));
    }

    #[test]
    fn test_markup_in_content_is_escaped() {
        let lines = classify("- <script>alert(\"x\")</script> & more");
        let bytes = render_flowing("Jane", &lines).unwrap();
        let document = read_part(&bytes, DOCUMENT_PATH);
        assert!(!document.contains("<script>"));
        assert!(document.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_placeholder_text_in_content_is_not_substituted() {
        let lines = classify("{body} and {title}");
        let bytes = render_flowing("{title}", &lines).unwrap();
        let document = read_part(&bytes, DOCUMENT_PATH);
        assert!(document.contains("{body} and {title}"));
        assert!(document.contains("{title}&apos;s Resume"));
    }

    #[test]
    fn test_escape_xml_drops_control_characters() {
        assert_eq!(escape_xml("a\u{1}b\tc"), "ab c");
    }

    #[test]
    fn test_escape_xml_drops_noncharacters() {
        assert_eq!(escape_xml("a\u{FFFF}b\u{FFFE}"), "ab");
        assert_eq!(escape_xml("\u{D7FF}\u{E000}\u{FFFD}"), "\u{D7FF}\u{E000}\u{FFFD}");
        assert_eq!(escape_xml("emoji \u{1F680}"), "emoji \u{1F680}");
    }

    #[test]
    fn test_noncharacters_never_reach_document_part() {
        let lines = classify("- shipped\u{FFFF} v2\n### Skills\u{FFFE}");
        let bytes = render_flowing("Jane\u{FFFF}", &lines).unwrap();
        for path in [DOCUMENT_PATH, CORE_PROPS_PATH] {
            let part = read_part(&bytes, path);
            assert!(!part.contains(&['\u{FFFE}', '\u{FFFF}'][..]), "{path} has a noncharacter");
        }
        assert!(read_part(&bytes, DOCUMENT_PATH).contains(">shipped v2<"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let lines = classify("### A\n- b\nc");
        assert_eq!(
            render_flowing("X", &lines).unwrap(),
            render_flowing("X", &lines).unwrap()
        );
    }
}
