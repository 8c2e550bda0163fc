// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::Path};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use roadmap_core::{Block, NO_EVENTS, SIGNATURE};

/// File name the export falls back to when neither the config nor the
/// command line names one.
pub const DEFAULT_OUTPUT: &str = "timeline.pdf";

// A4 portrait, in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 72.0;
const LEADING: f32 = 1.4;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const FONT_OBLIQUE: &str = "F3";

/// Typesets the block sequence into a PDF document and returns its bytes.
///
/// One flowing column: every block becomes one or more text lines with a
/// font, size and gray level per block kind; a page break happens whenever
/// the cursor would cross the bottom margin.
pub fn render(blocks: &[Block]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let font_oblique = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Oblique",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_regular,
            FONT_BOLD => font_bold,
            FONT_OBLIQUE => font_oblique,
        },
    });

    let lines = lines(blocks);
    let mut kids: Vec<Object> = Vec::new();
    for page in paginate(&lines) {
        let mut operations = Vec::new();
        for (y, line) in page {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![line.font.into(), line.size.into()]));
            operations.push(Operation::new("g", vec![line.gray.into()]));
            operations.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.text.as_str())],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Renders the blocks and writes the document to `path`.
pub fn render_to_file(blocks: &[Block], path: &Path) -> Result<(), Box<dyn Error>> {
    tracing::debug!(path = %path.display(), blocks = blocks.len(), "writing pdf...");
    let bytes = render(blocks)?;
    fs::write(path, bytes)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e).into())
}

struct Line {
    font: &'static str,
    size: f32,
    gray: f32,
    space_before: f32,
    text: String,
}

impl Line {
    fn new(font: &'static str, size: f32, gray: f32, space_before: f32, text: &str) -> Self {
        Self {
            font,
            size,
            gray,
            space_before,
            text: text.to_string(),
        }
    }
}

fn lines(blocks: &[Block]) -> Vec<Line> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Title(text) => {
                lines.push(Line::new(FONT_BOLD, 20.0, 0.0, 0.0, text));
            }
            Block::MonthHeader(name) => {
                lines.push(Line::new(FONT_BOLD, 13.0, 0.0, 14.0, name));
            }
            Block::NoEvents => {
                lines.push(Line::new(FONT_OBLIQUE, 10.0, 0.45, 4.0, NO_EVENTS));
            }
            Block::Entry {
                dates,
                title,
                description,
            } => {
                lines.push(Line::new(FONT_OBLIQUE, 9.0, 0.45, 6.0, dates));
                lines.push(Line::new(FONT_BOLD, 11.0, 0.0, 2.0, title));
                lines.push(Line::new(FONT_REGULAR, 10.0, 0.2, 2.0, description));
            }
            Block::Signature => {
                lines.push(Line::new(FONT_OBLIQUE, 10.0, 0.45, 24.0, SIGNATURE));
            }
        }
    }
    lines
}

/// Splits the line run into pages, assigning each line its baseline y.
fn paginate(lines: &[Line]) -> Vec<Vec<(f32, &Line)>> {
    let mut pages = Vec::new();
    let mut page: Vec<(f32, &Line)> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        let advance = line.space_before + line.size * LEADING;
        if y - advance < MARGIN && !page.is_empty() {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - MARGIN;
            // no leading gap at the top of a fresh page
            y -= line.size * LEADING;
        } else {
            y -= advance;
        }
        page.push((y, line));
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::{EventStore, build_document};

    fn blocks() -> Vec<Block> {
        build_document("Ben", &EventStore::new())
    }

    #[test]
    fn test_render_produces_a_pdf() {
        let bytes = render(&blocks()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert!(!doc.get_pages().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let blocks = blocks();
        assert_eq!(render(&blocks).unwrap(), render(&blocks).unwrap());
    }

    #[test]
    fn test_many_events_break_onto_multiple_pages() {
        let mut store = EventStore::new();
        for month in roadmap_core::Month::ALL {
            for i in 0..5 {
                store
                    .add(
                        month,
                        roadmap_core::EventDraft {
                            day_one: "1".to_string(),
                            day_two: "2".to_string(),
                            title: format!("Entry {i}"),
                            description: "Something to do".to_string(),
                        },
                    )
                    .unwrap();
            }
        }

        let bytes = render(&build_document("Ben", &store)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn test_render_to_file_writes_the_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        render_to_file(&blocks(), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
