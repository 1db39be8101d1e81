//! Paginated Renderer: places classified lines on fixed US-letter pages and writes a PDF.
//!
//! # Architecture
//! - `layout_pages` is the pure pagination pass: a single `PageCursor` walks down the page,
//!   breaking to a new page whenever it has dropped below the bottom margin. Lines too
//!   wide for the page are word-wrapped using the Helvetica advance widths.
//! - `write_pdf` serializes the finished layout with `pdf-writer`, using the standard
//!   Helvetica / Helvetica-Bold Type1 fonts (no font embedding).
//!
//! The break check runs BEFORE each line is placed and uses `y < margin`, so a line whose
//! baseline lands exactly on the margin is still drawn on the current page. Nothing is ever
//! drawn below the margin.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::document::classifier::{ClassifiedLine, LineKind};
use crate::document::{helvetica, title_for, winansi};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry and draw styles
// ────────────────────────────────────────────────────────────────────────────

/// US letter, in PDF points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
/// Left, top and bottom margin.
pub const MARGIN: f32 = 40.0;

const BULLET_PREFIX: &str = "• ";

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn resource_name(self) -> Name<'static> {
        match self {
            Face::Regular => REGULAR_FONT,
            Face::Bold => BOLD_FONT,
        }
    }
}

/// How a line is drawn: font face and size, left edge, and how far the cursor moves after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub face: Face,
    pub size: f32,
    pub x: f32,
    pub step: f32,
}

pub const TITLE_STYLE: DrawStyle = DrawStyle {
    face: Face::Bold,
    size: 16.0,
    x: MARGIN,
    step: 30.0,
};

pub const HEADING_STYLE: DrawStyle = DrawStyle {
    face: Face::Bold,
    size: 14.0,
    x: MARGIN,
    step: 20.0,
};

pub const BULLET_STYLE: DrawStyle = DrawStyle {
    face: Face::Regular,
    size: 12.0,
    x: MARGIN + 10.0,
    step: 15.0,
};

pub const PARAGRAPH_STYLE: DrawStyle = DrawStyle {
    face: Face::Regular,
    size: 12.0,
    x: MARGIN,
    step: 15.0,
};

pub fn style_for(kind: LineKind) -> DrawStyle {
    match kind {
        LineKind::Heading => HEADING_STYLE,
        LineKind::Bullet => BULLET_STYLE,
        LineKind::Paragraph => PARAGRAPH_STYLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

/// Vertical position tracker. `y` is the baseline of the next line, measured from the
/// bottom of the page as PDF does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub y: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl PageCursor {
    pub fn new(page_height: f32, margin: f32) -> Self {
        Self {
            y: page_height - margin,
            page_height,
            margin,
        }
    }

    pub fn needs_break(&self) -> bool {
        self.y < self.margin
    }

    pub fn reset(&mut self) {
        self.y = self.page_height - self.margin;
    }

    pub fn advance(&mut self, step: f32) {
        self.y -= step;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// A run of text at a fixed position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub face: Face,
    pub size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<PlacedText>,
}

/// Places the title and every line onto pages. Always returns at least one page.
///
/// Lines wider than the space left of the right margin wrap onto extra rows, each one
/// `step` below the last. Continuation rows of a bullet hang under its text, not its marker.
pub fn layout_pages(name: &str, lines: &[ClassifiedLine]) -> Vec<PageLayout> {
    let mut pages = Vec::new();
    let mut current = PageLayout::default();
    let mut cursor = PageCursor::new(PAGE_HEIGHT, MARGIN);

    let title = title_for(name);
    place_wrapped(&mut pages, &mut current, &mut cursor, TITLE_STYLE, "", &title);

    for line in lines {
        let prefix = match line.kind {
            LineKind::Bullet => BULLET_PREFIX,
            LineKind::Heading | LineKind::Paragraph => "",
        };
        place_wrapped(
            &mut pages,
            &mut current,
            &mut cursor,
            style_for(line.kind),
            prefix,
            &line.content,
        );
    }

    pages.push(current);
    pages
}

fn place_wrapped(
    pages: &mut Vec<PageLayout>,
    current: &mut PageLayout,
    cursor: &mut PageCursor,
    style: DrawStyle,
    prefix: &str,
    text: &str,
) {
    let indent = helvetica::text_width(prefix, style.face, style.size);
    let max_width = PAGE_WIDTH - MARGIN - style.x - indent;
    let rows = helvetica::wrap_text(text, style.face, style.size, max_width);

    for (i, row) in rows.into_iter().enumerate() {
        if cursor.needs_break() {
            pages.push(std::mem::take(current));
            cursor.reset();
        }

        let (x, text) = if i == 0 {
            (style.x, format!("{prefix}{row}"))
        } else {
            (style.x + indent, row)
        };
        current.items.push(PlacedText {
            x,
            y: cursor.y,
            face: style.face,
            size: style.size,
            text,
        });
        cursor.advance(style.step);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PDF serialization
// ────────────────────────────────────────────────────────────────────────────

/// Renders classified lines into PDF bytes.
pub fn render_paginated(name: &str, lines: &[ClassifiedLine]) -> Vec<u8> {
    let pages = layout_pages(name, lines);
    write_pdf(&title_for(name), &pages)
}

/// Serializes a finished layout. Object ids: catalog, page tree, two fonts, info, then
/// one (page, content stream) pair per page.
fn write_pdf(title: &str, pages: &[PageLayout]) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_font_id = Ref::new(3);
    let bold_font_id = Ref::new(4);
    let info_id = Ref::new(5);
    let first_page_ref = 6;

    let page_ids: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| {
            (
                Ref::new(first_page_ref + 2 * i),
                Ref::new(first_page_ref + 2 * i + 1),
            )
        })
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    pdf.type1_font(regular_font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_font_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.document_info(info_id).title(TextStr(title));

    for (layout, (page_id, content_id)) in pages.iter().zip(page_ids.iter()) {
        let content = page_content(layout);

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(*content_id);
        page.resources()
            .fonts()
            .pair(REGULAR_FONT, regular_font_id)
            .pair(BOLD_FONT, bold_font_id);
        page.finish();

        pdf.stream(*content_id, &content);
    }

    pdf.finish()
}

fn page_content(layout: &PageLayout) -> Vec<u8> {
    let mut content = Content::new();
    for item in &layout.items {
        let encoded = winansi::encode(&item.text);
        content.begin_text();
        content.set_font(item.face.resource_name(), item.size);
        content.next_line(item.x, item.y);
        content.show(Str(&encoded));
        content.end_text();
    }
    content.finish()
}
