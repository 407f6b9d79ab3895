//! Reading paragraphs out of the source document.
//!
//! Word documents (`.docx`) are read from `word/document.xml` inside the
//! archive; anything else is treated as UTF-8 text with one paragraph per
//! line.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{LoadError, Result};
use crate::parser::parse;
use crate::types::FlashcardRecord;

const DOCUMENT_PART: &str = "word/document.xml";

/// Read the document at `path` and parse it into flashcards.
pub fn load_flashcards(path: &Path) -> Result<Vec<FlashcardRecord>> {
    let paragraphs = read_paragraphs(path)?;
    Ok(parse(&paragraphs))
}

/// Read the paragraphs of the document at `path`.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let unavailable = |source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let is_docx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));

    if is_docx {
        let file = File::open(path).map_err(unavailable)?;
        docx_paragraphs(BufReader::new(file))
    } else {
        let content = std::fs::read_to_string(path).map_err(unavailable)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Extract body paragraphs from a `.docx` archive.
pub fn docx_paragraphs<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let part = archive.by_name(DOCUMENT_PART)?;
    document_xml_paragraphs(BufReader::new(part))
}

fn document_xml_paragraphs<R: std::io::BufRead>(input: R) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut table_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => current = Some(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(ref e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:p" if table_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" => push_char(&mut current, '\t'),
                b"w:br" | b"w:cr" => push_char(&mut current, '\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(text) = current.as_mut() {
        text.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn build_docx(body: &str) -> Cursor<Vec<u8>> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn docx_runs_are_joined_per_paragraph() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>Teacher: Hello</w:t></w:r><w:r><w:t xml:space="preserve"> : [مرحبا] : </w:t></w:r><w:r><w:t>marhaban</w:t></w:r></w:p>"#,
        );
        let paragraphs = docx_paragraphs(docx).unwrap();
        assert_eq!(paragraphs, vec!["Teacher: Hello : [مرحبا] : marhaban"]);
    }

    #[test]
    fn docx_keeps_empty_paragraphs_and_order() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>first</w:t></w:r></w:p><w:p/><w:p><w:pPr/></w:p><w:p><w:r><w:t>last</w:t></w:r></w:p>"#,
        );
        let paragraphs = docx_paragraphs(docx).unwrap();
        assert_eq!(paragraphs, vec!["first", "", "", "last"]);
    }

    #[test]
    fn docx_unescapes_entities_and_tabs() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>Fish &amp; chips</w:t><w:tab/><w:t>x</w:t></w:r></w:p>"#,
        );
        let paragraphs = docx_paragraphs(docx).unwrap();
        assert_eq!(paragraphs, vec!["Fish & chips\tx"]);
    }

    #[test]
    fn docx_skips_table_paragraphs() {
        let docx = build_docx(
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>body</w:t></w:r></w:p>"#,
        );
        let paragraphs = docx_paragraphs(docx).unwrap();
        assert_eq!(paragraphs, vec!["body"]);
    }

    #[test]
    fn non_zip_input_is_invalid_document() {
        let result = docx_paragraphs(Cursor::new(b"not a zip".to_vec()));
        assert!(matches!(result, Err(LoadError::InvalidDocument(_))));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let result = load_flashcards(Path::new("/definitely/missing/Flash Card Text.docx"));
        assert!(matches!(result, Err(LoadError::SourceUnavailable { .. })));

        let result = read_paragraphs(Path::new("/definitely/missing/cards.txt"));
        assert!(matches!(result, Err(LoadError::SourceUnavailable { .. })));
    }
}
