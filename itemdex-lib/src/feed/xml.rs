//! Item feed decoding

use log::debug;
use quick_xml::Reader;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};

use crate::error::FeedError;
use crate::model::{ItemRecord, ItemType};

/// Decodes every `item` element of a category feed, in document order.
///
/// Only document-level XML problems fail the decode. Malformed records
/// are kept with whatever structure they do carry: a missing or empty
/// `attributes` block yields an empty attribute set, a `resistance`
/// without its two attributes is dropped, an item without a `type`
/// child simply has no sprite classification.
pub fn parse_items(xml: &str) -> Result<Vec<ItemRecord>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<ItemState> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(FeedError::Syntax {
                    position: reader.buffer_position() as u64,
                    source,
                });
            }
        };
        match event {
            Event::Start(element) => {
                let name = element_name(&element);
                if let Some(item) = current.as_mut() {
                    item.capture_unattainable = false;
                    item.depth += 1;
                    let depth = item.depth;
                    item.open_child(&name, &element, depth, true, position)?;
                } else if name == "item" {
                    current = Some(ItemState::open(&element, position)?);
                }
            }
            Event::Empty(element) => {
                let name = element_name(&element);
                if let Some(item) = current.as_mut() {
                    item.capture_unattainable = false;
                    let depth = item.depth + 1;
                    item.open_child(&name, &element, depth, false, position)?;
                } else if name == "item" {
                    items.push(ItemState::open(&element, position)?.record);
                }
            }
            Event::Text(text) => {
                if let Some(item) = current.as_mut() {
                    if item.capture_unattainable {
                        let value = text
                            .unescape()
                            .map_err(|source| FeedError::Syntax { position, source })?;
                        item.record.set_unattainable(value.as_ref() == "true");
                        item.capture_unattainable = false;
                    }
                }
            }
            Event::End(_) => {
                let closing_item = current.as_ref().is_some_and(|item| item.depth == 0);
                if closing_item {
                    if let Some(done) = current.take() {
                        items.push(done.record);
                    }
                } else if let Some(item) = current.as_mut() {
                    item.capture_unattainable = false;
                    if item.attributes_depth == Some(item.depth) {
                        item.attributes_depth = None;
                    }
                    item.depth -= 1;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

/// Decoder state for the `item` element currently open.
struct ItemState {
    record: ItemRecord,
    /// Element depth below the `item` element itself.
    depth: usize,
    /// Depth of the open `attributes` block, while inside one.
    attributes_depth: Option<usize>,
    /// Set while an `unattainable` entry may carry its flag as text.
    capture_unattainable: bool,
}

impl ItemState {
    /// Starts a record from an `item` element. The display name is the
    /// first attribute, whatever it is called.
    fn open(element: &BytesStart, position: u64) -> Result<Self, FeedError> {
        let mut name = String::new();
        if let Some(attribute) = element.attributes().next() {
            name = attribute_text(attribute?, position)?;
        }
        if name.is_empty() {
            debug!("item record without a display name");
        }
        Ok(Self {
            record: ItemRecord::new(name),
            depth: 0,
            attributes_depth: None,
            capture_unattainable: false,
        })
    }

    /// Handles an element opening at `depth` inside the item.
    /// `can_hold_content` is false for empty elements.
    fn open_child(
        &mut self,
        name: &str,
        element: &BytesStart,
        depth: usize,
        can_hold_content: bool,
        position: u64,
    ) -> Result<(), FeedError> {
        match name {
            "type" if self.record.item_type().is_none() => {
                if let Some((class, subclass)) = positional_pair(element, position)? {
                    self.record.set_item_type(ItemType { class, subclass });
                }
            }
            "resistance" => {
                if let Some((attribute, value)) = positional_pair(element, position)? {
                    self.record.push_resistance(attribute, value);
                } else {
                    debug!("resistance entry without two attributes on {}", self.record.name());
                }
            }
            "susceptibility" => {
                if let Some((attribute, value)) = positional_pair(element, position)? {
                    self.record.push_susceptibility(attribute, value);
                } else {
                    debug!(
                        "susceptibility entry without two attributes on {}",
                        self.record.name()
                    );
                }
            }
            // An empty `<attributes/>` has no children and produces no
            // closing event to clear the marker.
            "attributes" if can_hold_content && self.attributes_depth.is_none() => {
                self.attributes_depth = Some(depth);
            }
            _ => {}
        }

        // Direct children of the attributes block are item attributes,
        // named by their tag.
        if let Some(block_depth) = self.attributes_depth {
            if depth == block_depth + 1 {
                let value = value_attribute(element, position)?;
                if can_hold_content && name == "unattainable" {
                    self.capture_unattainable = true;
                }
                self.record.push_direct(name, value);
            }
        }
        Ok(())
    }
}

fn element_name(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Values of the first two attributes, positionally, or `None` when
/// the element carries fewer than two.
fn positional_pair(
    element: &BytesStart,
    position: u64,
) -> Result<Option<(String, String)>, FeedError> {
    let mut attributes = element.attributes();
    let Some(first) = attributes.next() else {
        return Ok(None);
    };
    let Some(second) = attributes.next() else {
        return Ok(None);
    };
    Ok(Some((
        attribute_text(first?, position)?,
        attribute_text(second?, position)?,
    )))
}

/// Value of the attribute literally named `value`, if present.
fn value_attribute(element: &BytesStart, position: u64) -> Result<Option<String>, FeedError> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == b"value" {
            return Ok(Some(attribute_text(attribute, position)?));
        }
    }
    Ok(None)
}

fn attribute_text(attribute: Attribute<'_>, position: u64) -> Result<String, FeedError> {
    Ok(attribute
        .unescape_value()
        .map_err(|source| FeedError::Syntax { position, source })?
        .into_owned())
}

// ============================================================================
// Tests
// ============================================================================
