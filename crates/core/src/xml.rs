//! XML to [`RawNode`] normalization.
//!
//! The tree mirrors the document: the root element becomes the top-level
//! mapping, child elements are keyed by their local name (`ows:Title` becomes
//! `Title`), attributes are folded into the same mapping under their qualified
//! name (`xlink:href`), and repeated children collapse into a sequence.
//! Namespace declarations are dropped.

use crate::error::{Result, XmlError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tilescope_api::models::raw::{RawNode, TEXT_KEY};

struct Frame {
    name: String,
    node: RawNode,
    text: String,
}

impl Frame {
    fn finish(self) -> (String, RawNode) {
        let text = self.text.trim();
        let node = match self.node {
            RawNode::Map(map) if map.is_empty() => RawNode::text_leaf(text),
            mut node => {
                if !text.is_empty() {
                    node.push_child(TEXT_KEY, RawNode::text_leaf(text));
                }
                node
            }
        };
        (self.name, node)
    }
}

/// Parse `xml` into a tree rooted at the document element.
pub fn parse(xml: &str) -> Result<RawNode> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::with_capacity(16);
    let mut root: Option<RawNode> = None;

    loop {
        let event = reader.read_event().map_err(|e| XmlError::Syntax {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                stack.push(open_frame(&reader, &e)?);
            }
            Event::Empty(e) => {
                let frame = open_frame(&reader, &e)?;
                close_frame(frame, &mut stack, &mut root)?;
            }
            Event::End(e) => {
                let Some(frame) = stack.pop() else {
                    let name = decode(&reader, e.local_name().as_ref())?;
                    return Err(XmlError::UnexpectedClose(name));
                };
                close_frame(frame, &mut stack, &mut root)?;
            }
            Event::Text(t) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&decode(&reader, &t)?);
                }
            }
            Event::CData(c) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&decode(&reader, &c)?);
                }
            }
            Event::GeneralRef(r) => {
                let name = r.decode().map_err(|e| XmlError::Syntax {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                if let Some(frame) = stack.last_mut() {
                    let entity = format!("&{};", name);
                    match quick_xml::escape::unescape(&entity) {
                        Ok(resolved) => frame.text.push_str(&resolved),
                        // Entities declared in a DTD are not expanded; keep them verbatim.
                        Err(_) => frame.text.push_str(&entity),
                    }
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }
    root.ok_or(XmlError::NoRoot)
}

fn open_frame(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Frame> {
    let name = decode(reader, start.local_name().as_ref())?;
    let mut node = RawNode::empty_map();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::Syntax {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;
        let key = decode(reader, attr.key.as_ref())?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let raw = decode(reader, &attr.value)?;
        // Same rule as text: an entity that cannot be resolved stays verbatim.
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(resolved) => resolved.into_owned(),
            Err(_) => raw,
        };
        node.push_child(key, RawNode::text_leaf(value));
    }

    Ok(Frame {
        name,
        node,
        text: String::new(),
    })
}

fn close_frame(frame: Frame, stack: &mut [Frame], root: &mut Option<RawNode>) -> Result<()> {
    let (name, node) = frame.finish();
    match stack.last_mut() {
        Some(parent) => parent.node.push_child(name, node),
        None if root.is_some() => {
            return Err(XmlError::Syntax {
                position: 0,
                message: format!("second root element <{}>", name),
            });
        }
        None => *root = Some(node),
    }
    Ok(())
}

fn decode(reader: &Reader<&[u8]>, bytes: &[u8]) -> Result<String> {
    reader
        .decoder()
        .decode(bytes)
        .map(|value| value.into_owned())
        .map_err(|e| XmlError::Syntax {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })
}
