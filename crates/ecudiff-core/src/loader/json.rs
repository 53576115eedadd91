//! JSON backup parsing
//!
//! The ECU list lives at `vehicle.communications.ecus.ecu`. Any level may
//! hold either an object or an array of objects.

use crate::errors::{EcuDiffError, Result};
use crate::loader::block_from_tag;
use crate::model::{AdaptionGroup, CodingItem, EcuRecord, Node, Snapshot};
use serde_json::Value;

const ECU_LIST_POINTER: &str = "/vehicle/communications/ecus/ecu";

/// Parse a JSON backup into a snapshot
///
/// # Errors
///
/// - `InvalidDocument` if the bytes are not valid JSON
/// - `MissingField` if the ECU list or an `ecu_id` is absent
pub fn parse_json_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| EcuDiffError::InvalidDocument {
        format: "JSON".to_string(),
        reason: e.to_string(),
    })?;

    let ecus = root
        .pointer(ECU_LIST_POINTER)
        .ok_or_else(|| EcuDiffError::MissingField {
            field: "vehicle.communications.ecus.ecu".to_string(),
            context: "JSON document".to_string(),
        })?;

    let records = one_or_many(ecus)
        .into_iter()
        .map(parse_ecu)
        .collect::<Result<Vec<_>>>()?;
    Ok(Snapshot::from_records(records))
}

/// Objects count as one element, arrays as many, anything else as none
fn one_or_many(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(elements) => elements.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Render a scalar as a string; numbers and booleans keep their JSON text
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_ecu(value: &Value) -> Result<EcuRecord> {
    let id = scalar(value.get("ecu_id")).ok_or_else(|| EcuDiffError::MissingField {
        field: "ecu_id".to_string(),
        context: "ECU record".to_string(),
    })?;
    let name = scalar(value.get("ecu_name")).unwrap_or_default();

    let blocks = value
        .get("ecu_master")
        .map(one_or_many)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|block| {
            let tag = block
                .get("@type")
                .or_else(|| block.get("type"))
                .and_then(Value::as_str);
            let values = block.get("values").map(parse_node).unwrap_or_else(Node::empty);
            block_from_tag(tag, values, &id)
        })
        .collect();

    Ok(EcuRecord { id, name, blocks })
}

/// Parse a `values` entry: an array becomes a collection, an object a single node
fn parse_node(value: &Value) -> Node {
    match value {
        Value::Array(elements) => Node::Collection(elements.iter().map(parse_node).collect()),
        Value::Object(_) => parse_member(value),
        _ => Node::empty(),
    }
}

/// An object with nested `values` is a group, anything else a coding item
fn parse_member(value: &Value) -> Node {
    let display_name = scalar(value.get("display_name")).unwrap_or_default();
    match value.get("values") {
        Some(nested) => Node::Group(AdaptionGroup::new(display_name, parse_node(nested))),
        None => Node::Leaf(CodingItem {
            display_name,
            hex_value: scalar(value.get("hex_value")),
            bin_value: scalar(value.get("bin_value")),
            display_value: scalar(value.get("display_value")),
        }),
    }
}
