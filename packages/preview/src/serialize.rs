//! # Defensive Argument Serialization
//!
//! Console arguments can be anything, including object graphs that refer
//! back to themselves. Values live in a [`ValueHeap`] arena and refer to each
//! other by [`ValueId`], so cycles are representable without shared
//! ownership.
//!
//! Each argument is serialized on its own:
//!
//! - errors become their `toString()` text at the top level
//! - composites are walked once; any node seen before within the same
//!   argument is replaced by `"[Circular]"`
//! - anything unserializable turns the whole argument into
//!   `"Unserializable Object"`
//! - primitives pass through

use serde_json::{Map, Value};
use std::collections::HashSet;

pub const CIRCULAR: &str = "[Circular]";
pub const UNSERIALIZABLE: &str = "Unserializable Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum HeapValue {
    Primitive(Value),

    /// An error object with its `name: message` text
    Error(String),

    Array(Vec<ValueId>),
    Object(Vec<(String, ValueId)>),

    /// Has no JSON form (a BigInt, for instance)
    Opaque,
}

#[derive(Debug, Clone, Default)]
pub struct ValueHeap {
    nodes: Vec<HeapValue>,
}

impl ValueHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, value: HeapValue) -> ValueId {
        self.nodes.push(value);
        ValueId(self.nodes.len() - 1)
    }

    pub fn primitive(&mut self, value: impl Into<Value>) -> ValueId {
        self.alloc(HeapValue::Primitive(value.into()))
    }

    pub fn error(&mut self, text: impl Into<String>) -> ValueId {
        self.alloc(HeapValue::Error(text.into()))
    }

    pub fn array(&mut self) -> ValueId {
        self.alloc(HeapValue::Array(Vec::new()))
    }

    pub fn object(&mut self) -> ValueId {
        self.alloc(HeapValue::Object(Vec::new()))
    }

    pub fn opaque(&mut self) -> ValueId {
        self.alloc(HeapValue::Opaque)
    }

    /// Append to an array node. Ignored for other node kinds.
    pub fn push(&mut self, array: ValueId, item: ValueId) {
        if let Some(HeapValue::Array(items)) = self.nodes.get_mut(array.0) {
            items.push(item);
        }
    }

    /// Set a property on an object node, replacing an existing key
    pub fn insert(&mut self, object: ValueId, key: impl Into<String>, value: ValueId) {
        let key = key.into();
        if let Some(HeapValue::Object(entries)) = self.nodes.get_mut(object.0) {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
    }

    pub fn get(&self, id: ValueId) -> Option<&HeapValue> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct Unserializable;

/// Serialize one console argument
pub fn serialize_arg(heap: &ValueHeap, id: ValueId) -> Value {
    let result = match heap.get(id) {
        Some(HeapValue::Error(text)) => Ok(Value::String(text.clone())),
        Some(HeapValue::Primitive(value)) => Ok(value.clone()),
        _ => to_json(heap, id, &mut HashSet::new()),
    };
    result.unwrap_or_else(|Unserializable| Value::String(UNSERIALIZABLE.to_string()))
}

/// Serialize every argument independently
pub fn serialize_args(heap: &ValueHeap, args: &[ValueId]) -> Vec<Value> {
    args.iter().map(|&id| serialize_arg(heap, id)).collect()
}

fn to_json(heap: &ValueHeap, id: ValueId, seen: &mut HashSet<ValueId>) -> Result<Value, Unserializable> {
    let node = heap.get(id).ok_or(Unserializable)?;
    match node {
        HeapValue::Primitive(value) => return Ok(value.clone()),
        HeapValue::Opaque => return Err(Unserializable),
        HeapValue::Error(_) | HeapValue::Array(_) | HeapValue::Object(_) => {}
    }

    if !seen.insert(id) {
        return Ok(Value::String(CIRCULAR.to_string()));
    }

    match node {
        HeapValue::Array(items) => items
            .iter()
            .map(|&item| to_json(heap, item, seen))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        HeapValue::Object(entries) => {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key.clone(), to_json(heap, *value, seen)?);
            }
            Ok(Value::Object(map))
        }
        // Nested errors carry no enumerable properties
        _ => Ok(Value::Object(Map::new())),
    }
}
