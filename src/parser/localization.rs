//! Localization document reader.
//!
//! The localization file is not LSX; it is a flat list of
//! `<content contentuid="...">text</content>` elements under `<contentList>`.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{LootError, Result};

use super::lsx::read_attributes;

/// Parse a localization document into `(handle, text)` pairs, in file order.
pub fn parse_localization(source: &str) -> Result<Vec<(String, String)>> {
    let source = source.trim_start_matches('\u{feff}');
    // Content bodies are kept verbatim; whitespace between elements is
    // dropped because no <content> is open
    let mut reader = Reader::from_str(source);

    let mut buf = Vec::new();
    let mut entries = Vec::new();
    // Handle and text of the currently open <content> element
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"content" => {
                current = Some((content_uid(&e)?, String::new()));
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"content" => {
                entries.push((content_uid(&e)?, String::new()));
            }
            Ok(Event::Text(e)) => {
                if let Some((_, text)) = current.as_mut() {
                    let unescaped = e
                        .unescape()
                        .map(|t| t.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some((_, text)) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"content" => {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LootError::parse(format!(
                    "Malformed localization XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

fn content_uid(e: &quick_xml::events::BytesStart<'_>) -> Result<String> {
    read_attributes(e)?
        .into_iter()
        .find(|(key, _)| key == "contentuid")
        .map(|(_, value)| value)
        .ok_or_else(|| LootError::Parse {
            message: "<content> element without contentuid".to_string(),
            help: Some("Every localization entry needs a contentuid attribute".to_string()),
        })
}
