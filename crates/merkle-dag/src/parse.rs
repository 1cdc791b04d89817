//! Conversion between [`MerkleNode`] trees and the daemon's JSON shape.
//!
//! The daemon wraps node listings either in a single object or in an array
//! of objects. Required field: `Hash` (with `Key` as a legacy fallback).
//! Optional fields: `Name`, `Size`, `Type`, `Links`, `Data`. An optional
//! field of the wrong JSON type reads as absent; only the hash is
//! load-bearing.

use serde_json::{Map, Value};

use crate::error::MerkleDagError;
use crate::node::MerkleNode;

/// Parses a top-level JSON value into a sequence of nodes.
///
/// A single object yields one node, an array yields one node per element in
/// the original order, and any other shape yields an empty vector. The first
/// element that fails to parse fails the whole call.
pub fn merkle_nodes_from_json(json: &Value) -> Result<Vec<MerkleNode>, MerkleDagError> {
    match json {
        Value::Object(_) => Ok(vec![merkle_node_from_json(json)?]),
        Value::Array(items) => items.iter().map(merkle_node_from_json).collect(),
        _ => Ok(Vec::new()),
    }
}

/// Parses one JSON object into a [`MerkleNode`], recursing into `Links`.
///
/// Children are fully constructed before the parent (bottom-up), so a parent
/// never exists with a failed child; the child's error propagates unchanged.
pub fn merkle_node_from_json(json: &Value) -> Result<MerkleNode, MerkleDagError> {
    let obj = json.as_object().ok_or(MerkleDagError::JsonShape)?;

    let hash = obj
        .get("Hash")
        .and_then(Value::as_str)
        .or_else(|| obj.get("Key").and_then(Value::as_str))
        .ok_or(MerkleDagError::RequiredFieldMissing("Hash"))?;

    let name = obj.get("Name").and_then(Value::as_str).map(str::to_owned);
    let size = obj.get("Size").and_then(Value::as_u64);
    let node_type = obj.get("Type").and_then(Value::as_i64);

    let links = match obj.get("Links").and_then(Value::as_array) {
        Some(raw_links) => Some(
            raw_links
                .iter()
                .map(merkle_node_from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    let data = obj
        .get("Data")
        .and_then(Value::as_str)
        .map(|s| s.as_bytes().to_vec());

    MerkleNode::from_parts(hash, name, size, node_type, links, data)
}

/// Serializes a node back into the daemon's JSON shape.
///
/// Emits `Hash` plus whichever optional fields are present, with links in
/// their original order. `data` bytes are written back as UTF-8 text.
pub fn merkle_node_to_json(node: &MerkleNode) -> Value {
    let mut obj = Map::new();
    obj.insert("Hash".to_owned(), Value::String(node.hash.to_base58()));
    if let Some(name) = &node.name {
        obj.insert("Name".to_owned(), Value::String(name.clone()));
    }
    if let Some(size) = node.size {
        obj.insert("Size".to_owned(), Value::from(size));
    }
    if let Some(node_type) = node.node_type {
        obj.insert("Type".to_owned(), Value::from(node_type));
    }
    if let Some(links) = &node.links {
        obj.insert(
            "Links".to_owned(),
            Value::Array(links.iter().map(merkle_node_to_json).collect()),
        );
    }
    if let Some(data) = &node.data {
        obj.insert(
            "Data".to_owned(),
            Value::String(String::from_utf8_lossy(data).into_owned()),
        );
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HASH_A: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

    #[test]
    fn key_is_a_fallback_for_hash() {
        let from_hash = merkle_node_from_json(&json!({ "Hash": HASH_A })).unwrap();
        let from_key = merkle_node_from_json(&json!({ "Key": HASH_A })).unwrap();
        assert_eq!(from_hash, from_key);
    }

    #[test]
    fn optional_type_mismatch_reads_as_absent() {
        let node = merkle_node_from_json(&json!({
            "Hash": HASH_A,
            "Name": 7,
            "Size": "big",
            "Type": "file",
        }))
        .unwrap();
        assert!(node.name.is_none());
        assert!(node.size.is_none());
        assert!(node.node_type.is_none());
    }

    #[test]
    fn missing_hash_is_an_error() {
        assert_eq!(
            merkle_node_from_json(&json!({ "Name": "x" })),
            Err(MerkleDagError::RequiredFieldMissing("Hash"))
        );
        // Present but not a string counts as missing.
        assert_eq!(
            merkle_node_from_json(&json!({ "Hash": 5 })),
            Err(MerkleDagError::RequiredFieldMissing("Hash"))
        );
    }
}
