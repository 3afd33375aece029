use serde_json::{Map, Value};

use crate::error::Error;
use crate::options::SerializeOptions;
use crate::path::parse_index;
use crate::Result;

/// Insert one field value into the result tree at the path named by
/// `segments`. Lenient mode (the default) is total: ambiguous shapes
/// degrade best-effort instead of erroring.
pub(crate) fn insert_field(
    root: &mut Map<String, Value>,
    field_name: &str,
    segments: &[&str],
    value: String,
    options: &SerializeOptions,
) -> Result<()> {
    insert_into_object(root, field_name, segments, value, options)
}

fn insert_into_object(
    map: &mut Map<String, Value>,
    field_name: &str,
    segments: &[&str],
    value: String,
    options: &SerializeOptions,
) -> Result<()> {
    let Some((&raw, rest)) = segments.split_first() else {
        return Ok(());
    };
    let segment = options.substitute(raw);

    // An empty segment means "append"; objects have no append position, so
    // degenerate input like `[]` at the root lands under the literal empty
    // key instead of crashing.
    if segment.is_empty() {
        if options.strict {
            return Err(Error::path_conflict(
                field_name,
                segment,
                "append to a non-array container",
            ));
        }
        push_leaf(map, segment, Value::String(value));
        return Ok(());
    }

    if rest.is_empty() {
        push_leaf(map, segment, Value::String(value));
        return Ok(());
    }

    let next = rest[0];
    match map.get_mut(segment) {
        Some(child) if child.is_object() || child.is_array() => {}
        Some(child) => {
            if options.strict {
                return Err(Error::path_conflict(
                    field_name,
                    segment,
                    "cannot descend into a scalar value",
                ));
            }
            *child = new_container(next);
        }
        None => {
            map.insert(segment.to_string(), new_container(next));
        }
    }
    match map.get_mut(segment) {
        Some(Value::Object(child)) => insert_into_object(child, field_name, rest, value, options),
        Some(Value::Array(child)) => insert_into_array(child, field_name, rest, value, options),
        _ => Err(Error::path_conflict(field_name, segment, "expected container")),
    }
}

fn insert_into_array(
    items: &mut Vec<Value>,
    field_name: &str,
    segments: &[&str],
    value: String,
    options: &SerializeOptions,
) -> Result<()> {
    let Some((&raw, rest)) = segments.split_first() else {
        return Ok(());
    };
    let segment = options.substitute(raw);

    if segment.is_empty() {
        items.push(Value::String(value));
        return Ok(());
    }

    let Some(index) = parse_index(segment) else {
        if options.strict {
            return Err(Error::path_conflict(
                field_name,
                segment,
                "non-numeric key for an array container",
            ));
        }
        // best effort: the field is still consumed into the tree
        items.push(Value::String(value));
        return Ok(());
    };

    if rest.is_empty() {
        match items.get_mut(index) {
            Some(existing) if !existing.is_null() => match existing {
                Value::Array(inner) => inner.push(Value::String(value)),
                other => {
                    let old = other.take();
                    *other = Value::Array(vec![old, Value::String(value)]);
                }
            },
            // absent or null-padded slot: plain assignment
            _ => {
                pad_to(items, index + 1);
                items[index] = Value::String(value);
            }
        }
        return Ok(());
    }

    let next = rest[0];
    let needs_container = match items.get(index) {
        Some(Value::Object(_)) | Some(Value::Array(_)) => false,
        Some(Value::Null) | None => true,
        Some(_) => {
            if options.strict {
                return Err(Error::path_conflict(
                    field_name,
                    segment,
                    "cannot descend into a scalar value",
                ));
            }
            true
        }
    };
    if needs_container {
        pad_to(items, index + 1);
        items[index] = new_container(next);
    }
    match &mut items[index] {
        Value::Object(child) => insert_into_object(child, field_name, rest, value, options),
        Value::Array(child) => insert_into_array(child, field_name, rest, value, options),
        _ => Err(Error::path_conflict(field_name, segment, "expected container")),
    }
}

/// Multi-value rule for a terminal object key: a second value turns the
/// existing entry into an array, further values append.
fn push_leaf(map: &mut Map<String, Value>, key: &str, value: Value) {
    match map.get_mut(key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let old = existing.take();
            *existing = Value::Array(vec![old, value]);
        }
        None => {
            map.insert(key.to_string(), value);
        }
    }
}

/// The container created for a yet-unseen key is chosen by peeking at the
/// next raw segment: empty or numeric means array, anything else object.
fn new_container(next: &str) -> Value {
    if next.is_empty() || parse_index(next).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn pad_to(items: &mut Vec<Value>, len: usize) {
    if items.len() < len {
        items.resize(len, Value::Null);
    }
}
