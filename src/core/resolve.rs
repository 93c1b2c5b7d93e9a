//! Call-site argument resolution
//!
//! Binds actual arguments to formal parameter names: named arguments bind
//! directly, positional arguments fill the remaining formals left to right,
//! and trailing extras pile onto the last formal (vararg-style). Calls with
//! no known signature still resolve their explicitly named arguments.

use super::document::Document;
use super::index::{FormalParameter, SignatureIndex};
use super::parser::NodeId;
use std::collections::HashMap;

/// Arguments of one call, keyed by parameter name
#[derive(Debug, Default)]
pub struct ArgumentMap {
    values: HashMap<String, Vec<NodeId>>,
    /// False when the callee had no signature and only named arguments
    /// could be bound
    resolved: bool,
}

impl ArgumentMap {
    /// First value bound to a parameter
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.values.get(name).and_then(|v| v.first().copied())
    }

    /// All values bound to a parameter (more than one only for trailing
    /// overflow onto the last formal)
    pub fn get_all(&self, name: &str) -> &[NodeId] {
        self.values.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether positional binding was possible
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Resolve the arguments of a call against the signature index
pub fn resolve_arguments(doc: &Document, index: &SignatureIndex, call: NodeId) -> ArgumentMap {
    let node = doc.node(call);
    let args = node.args();
    let signature = node.name().and_then(|n| index.lookup(n));

    let mut map = ArgumentMap {
        values: HashMap::new(),
        resolved: signature.is_some(),
    };

    // Named arguments bind first and claim their formals
    for arg in args {
        if let Some(name) = &arg.name {
            map.values.entry(name.clone()).or_default().push(arg.value);
        }
    }

    let Some(signature) = signature else {
        return map;
    };

    // Positional arguments fill unclaimed formals left to right
    let claimed: std::collections::HashSet<&str> =
        args.iter().filter_map(|a| a.name.as_deref()).collect();
    let mut formals = signature
        .iter()
        .filter(move |p| !claimed.contains(p.name.as_str()));
    let mut current: Option<&FormalParameter> = None;

    for arg in args {
        if arg.name.is_some() {
            continue;
        }
        match formals.next() {
            Some(param) => {
                map.values
                    .entry(param.name.clone())
                    .or_default()
                    .push(arg.value);
                current = Some(param);
            }
            // Overflow piles onto the last formal still open to positional
            // binding (formals claimed by name are skipped)
            None => {
                let name = current
                    .map(|p| p.name.clone())
                    .or_else(|| signature.last().map(|p| p.name.clone()));
                if let Some(name) = name {
                    map.values.entry(name).or_default().push(arg.value);
                }
            }
        }
    }

    map
}

/// Find the value of one argument of a call.
///
/// Resolves through the signature when available; otherwise falls back to
/// matching an explicitly named argument at the call site.
pub fn find_argument(
    doc: &Document,
    index: &SignatureIndex,
    call: NodeId,
    name: &str,
) -> Option<NodeId> {
    resolve_arguments(doc, index, call).get(name)
}
