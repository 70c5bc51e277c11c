//! Text extraction from a saved `.docx` package.
//!
//! One streaming pass over `word/document.xml` collects paragraph text, table
//! cell text and hyperlinks; hyperlink targets are resolved through
//! `word/_rels/document.xml.rels` and the title is read from
//! `docProps/core.xml`.
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesRef, Event};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_MEMBER: &str = "word/document.xml";
const DOCUMENT_RELS_MEMBER: &str = "word/_rels/document.xml.rels";
const CORE_PROPS_MEMBER: &str = "docProps/core.xml";

const MAX_PREALLOC: u64 = 1 << 20;

/// A hyperlink as found in the document: display text and resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkText {
    pub text: String,
    pub target: String,
}

/// Extracted text of a Word document.
///
/// # Example
///
/// ```rust,no_run
/// use voltic_guide::ooxml::docx::DocumentText;
///
/// let text = DocumentText::from_path("VOLTIC_USER_GUIDE_FORMATTED.docx")?;
/// assert!(text.contains("Table of Contents"));
/// for link in text.hyperlinks() {
///     println!("{} -> {}", link.text, link.target);
/// }
/// # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentText {
    paragraphs: Vec<String>,
    table_cells: Vec<String>,
    hyperlinks: Vec<HyperlinkText>,
    title: Option<String>,
    /// Paragraphs joined by `\n`
    full_text: String,
}

impl DocumentText {
    /// Read a package from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Read a package held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let document = read_member(&mut archive, DOCUMENT_MEMBER)?
            .ok_or_else(|| OoxmlError::PartNotFound(DOCUMENT_MEMBER.to_string()))?;
        let rels = match read_member(&mut archive, DOCUMENT_RELS_MEMBER)? {
            Some(xml) => parse_relationship_targets(&xml)?,
            None => HashMap::new(),
        };
        let title = match read_member(&mut archive, CORE_PROPS_MEMBER)? {
            Some(xml) => parse_core_title(&xml)?,
            None => None,
        };

        let mut text = parse_document(&document, &rels)?;
        text.title = title;
        text.full_text = text.paragraphs.join("\n");
        Ok(text)
    }

    /// Text per `<w:p>`, including paragraphs inside table cells.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Text per `<w:tc>`, cell paragraphs joined by `\n`.
    pub fn table_cells(&self) -> &[String] {
        &self.table_cells
    }

    pub fn hyperlinks(&self) -> &[HyperlinkText] {
        &self.hyperlinks
    }

    /// `dc:title` of the core properties.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All paragraph text joined by `\n`.
    pub fn text(&self) -> &str {
        &self.full_text
    }

    /// Whether `needle` occurs anywhere in the document text.
    pub fn contains(&self, needle: &str) -> bool {
        memchr::memmem::find(self.full_text.as_bytes(), needle.as_bytes()).is_some()
    }
}

fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::with_capacity(initial_capacity(file.size()));
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

/// Preallocation for a member whose header claims `declared` bytes; the
/// header is not trusted beyond `MAX_PREALLOC`.
fn initial_capacity(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

/// Append the text an entity or character reference stands for.
fn push_reference(out: &mut String, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| OoxmlError::Xml(e.to_string()))?
    {
        out.push(ch);
        return Ok(());
    }
    let name = reference
        .decode()
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    match resolve_xml_entity(&name) {
        Some(value) => out.push_str(value),
        None => {
            return Err(OoxmlError::Xml(format!("unknown entity &{};", name)));
        },
    }
    Ok(())
}

/// Map of relationship ID to target.
fn parse_relationship_targets(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = e.try_get_attribute("Id")?;
                let target = e.try_get_attribute("Target")?;
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(
                        id.decode_and_unescape_value(reader.decoder())?.into_owned(),
                        target.decode_and_unescape_value(reader.decoder())?.into_owned(),
                    );
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(targets)
}

fn parse_core_title(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut in_title = false;
    let mut title: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"dc:title" => {
                in_title = true;
                title = Some(String::new());
            },
            Event::End(e) if e.name().as_ref() == b"dc:title" => in_title = false,
            Event::Text(e) if in_title => {
                let text = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
                title.get_or_insert_with(String::new).push_str(&text);
            },
            Event::GeneralRef(e) if in_title => {
                push_reference(title.get_or_insert_with(String::new), &e)?;
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(title)
}

/// Text of the table cell currently open, with its paragraph count.
#[derive(Default)]
struct OpenCell {
    text: String,
    paragraphs: usize,
}

/// Walk `document.xml` once.
fn parse_document(xml: &str, rels: &HashMap<String, String>) -> Result<DocumentText> {
    let mut reader = Reader::from_str(xml);
    let mut out = DocumentText::default();

    let mut paragraph: Option<String> = None;
    let mut cells: Vec<OpenCell> = Vec::new();
    let mut link: Option<(String, String)> = None;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => paragraph = Some(String::new()),
                b"tc" => cells.push(OpenCell::default()),
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                b"hyperlink" => {
                    let r_id = match e.try_get_attribute("r:id")? {
                        Some(attr) => attr
                            .decode_and_unescape_value(reader.decoder())?
                            .into_owned(),
                        None => String::new(),
                    };
                    link = Some((r_id, String::new()));
                },
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => finish_paragraph(&mut out, &mut cells, String::new()),
                b"br" | b"cr" if in_run => {
                    // Page and column breaks carry no text
                    let is_line_break = match e.try_get_attribute("w:type")? {
                        Some(attr) => attr.value.as_ref() == b"textWrapping",
                        None => true,
                    };
                    if is_line_break {
                        push_text(&mut paragraph, &mut link, "\n");
                    }
                },
                b"tab" if in_run => push_text(&mut paragraph, &mut link, "\t"),
                _ => {},
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    let text = paragraph.take().unwrap_or_default();
                    finish_paragraph(&mut out, &mut cells, text);
                },
                b"tc" => {
                    if let Some(cell) = cells.pop() {
                        out.table_cells.push(cell.text);
                    }
                },
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"hyperlink" => {
                    if let Some((r_id, text)) = link.take() {
                        let target = rels.get(&r_id).ok_or_else(|| {
                            OoxmlError::InvalidRelationship(format!(
                                "hyperlink references unknown relationship '{}'",
                                r_id
                            ))
                        })?;
                        out.hyperlinks.push(HyperlinkText {
                            text,
                            target: target.clone(),
                        });
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                let text = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
                push_text(&mut paragraph, &mut link, &text);
            },
            Event::GeneralRef(e) if in_text => {
                let mut resolved = String::new();
                push_reference(&mut resolved, &e)?;
                push_text(&mut paragraph, &mut link, &resolved);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(out)
}

fn push_text(paragraph: &mut Option<String>, link: &mut Option<(String, String)>, text: &str) {
    if let Some(paragraph) = paragraph {
        paragraph.push_str(text);
    }
    if let Some((_, link_text)) = link {
        link_text.push_str(text);
    }
}

fn finish_paragraph(out: &mut DocumentText, cells: &mut [OpenCell], text: String) {
    if let Some(cell) = cells.last_mut() {
        if cell.paragraphs > 0 {
            cell.text.push('\n');
        }
        cell.text.push_str(&text);
        cell.paragraphs += 1;
    }
    out.paragraphs.push(text);
}
