//! Path addressing over an in-memory JSON document.
//!
//! Shared by every `DocumentStore` implementation so that all of them agree on
//! how `/a/b/c` maps onto nested objects.

use serde_json::{Map, Value};

/// Splits a path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Returns the value at `path`, or `None` when any segment is missing
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path).try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// Stores `value` at `path`, replacing non-object intermediates with objects
///
/// The root path (`/` or empty) replaces the whole document.
pub fn assign(root: &mut Value, path: &str, value: Value) {
    let parts: Vec<&str> = segments(path).collect();
    let Some((last, parents)) = parts.split_last() else {
        *root = value;
        return;
    };

    let mut node = root;
    for segment in parents {
        node = as_object(node)
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    as_object(node).insert((*last).to_string(), value);
}

fn as_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was replaced with an object"),
    }
}
