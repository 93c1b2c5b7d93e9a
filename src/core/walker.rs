//! Effective background resolution
//!
//! Answers "what color is behind this component?" by first searching the
//! component's own modifier chain, then walking up the declaration tree
//! checking each container's modifier chain and explicit surface colors.

use super::document::Document;
use super::extractor::{extract_color, Color};
use super::index::SignatureIndex;
use super::parser::NodeId;
use super::resolve::find_argument;

/// Resolve the effective background color of a component call.
///
/// Returns `None` when no concrete color can be determined anywhere on the
/// path to the root; callers must treat that as "unknown", not "white".
pub fn effective_background(
    doc: &Document,
    index: &SignatureIndex,
    component: NodeId,
) -> Option<Color> {
    if let Some(modifier) = find_argument(doc, index, component, "modifier") {
        if let Some(color) = background_in_chain(doc, index, modifier) {
            return Some(color);
        }
    }

    for ancestor in doc.ancestors(component) {
        let node = doc.node(ancestor);
        if !node.is_call() {
            continue;
        }

        // Containers that paint their own surface
        match node.name() {
            Some("Surface") => {
                if let Some(arg) = find_argument(doc, index, ancestor, "color") {
                    if let Some(color) = extract_color(doc, arg) {
                        return Some(color);
                    }
                }
            }
            Some("Scaffold") => {
                if let Some(arg) = find_argument(doc, index, ancestor, "containerColor") {
                    if let Some(color) = extract_color(doc, arg) {
                        return Some(color);
                    }
                }
            }
            _ => {}
        }

        if let Some(modifier) = find_argument(doc, index, ancestor, "modifier") {
            if let Some(color) = background_in_chain(doc, index, modifier) {
                return Some(color);
            }
        }
    }

    None
}

/// Search a modifier chain for a `background(...)` call and extract its
/// color argument
pub fn background_in_chain(
    doc: &Document,
    index: &SignatureIndex,
    chain: NodeId,
) -> Option<Color> {
    let call = find_chain_call(doc, chain, "background")?;
    let arg = find_argument(doc, index, call, "color")?;
    extract_color(doc, arg)
}

/// Find a call with the given name anywhere in a modifier chain
pub fn find_chain_call(doc: &Document, chain: NodeId, name: &str) -> Option<NodeId> {
    let mut current = Some(chain);
    while let Some(id) = current {
        let node = doc.node(id);
        if node.is_call() && node.name() == Some(name) {
            return Some(id);
        }
        current = node.receiver();
    }
    None
}

/// Whether a modifier chain contains a call with the given name
pub fn chain_contains(doc: &Document, chain: NodeId, name: &str) -> bool {
    find_chain_call(doc, chain, name).is_some()
}
