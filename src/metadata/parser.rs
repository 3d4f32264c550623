//! Streaming parser for the support metadata document.
//!
//! A single pass over the event stream builds all three tables. The parser
//! is a small state machine — `Idle`, inside a `<statement>`, or inside a
//! `<note>` — with one working record per state. Within a statement or note,
//! a stack of open tag names decides which leaf element is currently
//! receiving character data; text under any other tag goes nowhere, but the
//! stack discipline is kept so nesting never confuses the accumulation.

use super::SupportMetadata;
use crate::error::MetadataErrorKind;
use crate::model::{SupportStatement, DEFAULT_BUCKET};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parser state: at most one statement or note is open at a time.
enum State {
    Idle,
    InStatement {
        id: String,
        working: SupportStatement,
        tags: Vec<String>,
    },
    InNote {
        id: String,
        text: String,
        tags: Vec<String>,
    },
}

pub(super) fn parse_document(content: &str) -> Result<SupportMetadata, MetadataErrorKind> {
    let mut reader = Reader::from_str(content);
    let mut tables = SupportMetadata::default();
    let mut state = State::Idle;

    loop {
        match reader
            .read_event()
            .map_err(|e| MetadataErrorKind::MalformedXml(e.to_string()))?
        {
            Event::Start(start) => {
                handle_start(&start, &mut state, &mut tables, false)?;
            }
            Event::Empty(start) => {
                handle_start(&start, &mut state, &mut tables, true)?;
            }
            Event::Text(text) => {
                let chunk = text
                    .unescape()
                    .map_err(|e| MetadataErrorKind::MalformedXml(e.to_string()))?;
                append_text(&mut state, &chunk);
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                append_text(&mut state, &String::from_utf8_lossy(&raw));
            }
            Event::End(_) => handle_end(&mut state, &mut tables),
            Event::Eof => break,
            // Declarations, comments, processing instructions: no content.
            _ => {}
        }
    }

    Ok(tables)
}

fn handle_start(
    start: &BytesStart<'_>,
    state: &mut State,
    tables: &mut SupportMetadata,
    empty: bool,
) -> Result<(), MetadataErrorKind> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    match tag.as_str() {
        "statement" if matches!(state, State::Idle) => {
            let id = require_attr(start, "statement", "id")?;
            let working = SupportStatement::new(
                require_attr(start, "statement", "start_date")?,
                require_attr(start, "statement", "end_date")?,
                require_attr(start, "statement", "marker")?.as_str().into(),
            );
            if empty {
                // <statement/> carries no content; commit the bare record.
                tables.statements.insert(id, working);
            } else {
                *state = State::InStatement {
                    id,
                    working,
                    tags: vec![tag],
                };
            }
            return Ok(());
        }
        "note" if matches!(state, State::Idle) => {
            let id = require_attr(start, "note", "id")?;
            if empty {
                tables.notes.insert(id, String::new());
            } else {
                *state = State::InNote {
                    id,
                    text: String::new(),
                    tags: vec![tag],
                };
            }
            return Ok(());
        }
        "package" => {
            let name = require_attr(start, "package", "name")?;
            let note = optional_attr(start, "note")?;

            // Any package declaration lands in the bucket table, defaulting
            // to the generic bucket when no note namespaces it.
            let bucket = note.clone().unwrap_or_else(|| DEFAULT_BUCKET.to_string());
            tables.packages.entry(bucket).or_default().push(name);

            // A package inside a statement re-keys the statement's current
            // field values under the package's own identifier, letting one
            // statement apply to several buckets. Without a note this is a
            // self-write under the statement id.
            if let State::InStatement { id, working, .. } = state {
                let override_id = note.unwrap_or_else(|| id.clone());
                tables.statements.insert(override_id, working.clone());
            }
        }
        _ => {}
    }

    if !empty {
        match state {
            State::InStatement { tags, .. } | State::InNote { tags, .. } => tags.push(tag),
            State::Idle => {}
        }
    }
    Ok(())
}

fn append_text(state: &mut State, chunk: &str) {
    match state {
        State::InStatement { working, tags, .. } => match tags.last().map(String::as_str) {
            Some("summary") => working.summary.push_str(chunk),
            Some("link") => working.link.push_str(chunk),
            Some("text") => working.text.push_str(chunk),
            _ => {}
        },
        State::InNote { text, tags, .. } => {
            if tags.last().map(String::as_str) == Some("note") {
                text.push_str(chunk);
            }
        }
        State::Idle => {}
    }
}

fn handle_end(state: &mut State, tables: &mut SupportMetadata) {
    let closing = match state {
        State::InStatement { tags, .. } => tags.last().map(String::as_str) == Some("statement"),
        State::InNote { tags, .. } => tags.last().map(String::as_str) == Some("note"),
        State::Idle => false,
    };

    if closing {
        match std::mem::replace(state, State::Idle) {
            State::InStatement { id, working, .. } => {
                tables.statements.insert(id, working);
            }
            State::InNote { id, text, .. } => {
                tables.notes.insert(id, text);
            }
            State::Idle => {}
        }
    } else {
        match state {
            State::InStatement { tags, .. } | State::InNote { tags, .. } => {
                tags.pop();
            }
            State::Idle => {}
        }
    }
}

fn optional_attr(
    start: &BytesStart<'_>,
    name: &str,
) -> Result<Option<String>, MetadataErrorKind> {
    match start.try_get_attribute(name) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|v| Some(v.into_owned()))
            .map_err(|e| MetadataErrorKind::InvalidAttribute(e.to_string())),
        Ok(None) => Ok(None),
        Err(e) => Err(MetadataErrorKind::InvalidAttribute(e.to_string())),
    }
}

fn require_attr(
    start: &BytesStart<'_>,
    element: &str,
    name: &str,
) -> Result<String, MetadataErrorKind> {
    optional_attr(start, name)?.ok_or_else(|| MetadataErrorKind::MissingAttribute {
        element: element.to_string(),
        attribute: name.to_string(),
    })
}
