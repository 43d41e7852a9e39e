//! LSX document reader.
//!
//! Streams the markup with `quick-xml` and builds a [`Document`]. Only the
//! `region`, `node` and `attribute` elements carry meaning; everything else
//! (`save`, `version`, `children`) is walked through.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{LootError, Result};

use super::node::{Attribute, Document, Node, Region};

/// Read and parse an LSX file.
pub fn parse_lsx_file(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path).map_err(|e| LootError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_lsx(&source)
}

/// Parse LSX source text into a document.
pub fn parse_lsx(source: &str) -> Result<Document> {
    let source = source.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut document = Document::default();
    let mut region: Option<Region> = None;
    let mut stack: Vec<Node> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"region" => region = Some(Region::new(element_id(&e)?)),
                b"node" => stack.push(Node::new(element_id(&e)?)),
                b"attribute" => push_attribute(&mut stack, &e)?,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"region" => document.regions.push(Region::new(element_id(&e)?)),
                b"node" => attach(Node::new(element_id(&e)?), &mut stack, &mut region),
                b"attribute" => push_attribute(&mut stack, &e)?,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"node" => {
                    if let Some(node) = stack.pop() {
                        attach(node, &mut stack, &mut region);
                    }
                }
                b"region" => {
                    if let Some(done) = region.take() {
                        document.regions.push(done);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LootError::parse(format!(
                    "Malformed XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() || region.is_some() {
        return Err(LootError::parse("Unexpected end of document inside an open element"));
    }

    Ok(document)
}

/// Attach a finished node to its parent, or to the open region at top level.
fn attach(node: Node, stack: &mut [Node], region: &mut Option<Region>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if let Some(region) = region.as_mut() {
        region.nodes.push(node);
    }
}

fn push_attribute(stack: &mut [Node], e: &BytesStart<'_>) -> Result<()> {
    let Some(node) = stack.last_mut() else {
        return Ok(());
    };

    let mut attribute = Attribute::default();
    for (key, value) in read_attributes(e)? {
        match key.as_str() {
            "id" => attribute.id = value,
            "type" => attribute.type_name = Some(value),
            "value" => attribute.value = Some(value),
            "handle" => attribute.handle = Some(value),
            _ => {}
        }
    }
    node.attributes.push(attribute);
    Ok(())
}

fn element_id(e: &BytesStart<'_>) -> Result<String> {
    Ok(read_attributes(e)?
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .unwrap_or_default())
}

pub(crate) fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| LootError::parse(format!("Bad XML attribute: {}", err)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| LootError::parse(format!("Bad XML attribute value: {}", err)))?
            .into_owned();
        out.push((key, value));
    }
    Ok(out)
}
