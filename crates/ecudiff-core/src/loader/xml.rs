//! XML backup parsing
//!
//! The ECU list lives at `protocol/vehicle/communications/ecus/ecu`. Block
//! tags are carried in the `type` attribute of each `ecu_master` element.

use crate::errors::{EcuDiffError, Result};
use crate::loader::block_from_tag;
use crate::model::{AdaptionGroup, CodingItem, EcuRecord, Node, Snapshot};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProtocolXml {
    vehicle: Option<VehicleXml>,
}

#[derive(Debug, Deserialize)]
struct VehicleXml {
    communications: Option<CommunicationsXml>,
}

#[derive(Debug, Deserialize)]
struct CommunicationsXml {
    ecus: Option<EcusXml>,
}

#[derive(Debug, Deserialize)]
struct EcusXml {
    #[serde(default)]
    ecu: Vec<EcuXml>,
}

#[derive(Debug, Deserialize)]
struct EcuXml {
    ecu_id: Option<String>,
    #[serde(default)]
    ecu_name: String,
    #[serde(default)]
    ecu_master: Vec<BlockXml>,
}

#[derive(Debug, Deserialize)]
struct BlockXml {
    #[serde(rename = "@type")]
    kind: Option<String>,
    #[serde(default)]
    values: Vec<ValuesXml>,
}

#[derive(Debug, Deserialize)]
struct ValuesXml {
    #[serde(default)]
    display_name: String,
    hex_value: Option<String>,
    bin_value: Option<String>,
    display_value: Option<String>,
    #[serde(default)]
    values: Vec<ValuesXml>,
}

/// Parse an XML backup into a snapshot
///
/// # Errors
///
/// - `InvalidDocument` if the bytes are not well-formed UTF-8 XML
/// - `MissingField` if the ECU list or an `ecu_id` is absent
pub fn parse_xml_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    let invalid = |reason: String| EcuDiffError::InvalidDocument {
        format: "XML".to_string(),
        reason,
    };
    let text = std::str::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
    let protocol: ProtocolXml =
        quick_xml::de::from_str(text).map_err(|e: quick_xml::DeError| invalid(e.to_string()))?;

    let ecus = protocol
        .vehicle
        .and_then(|v| v.communications)
        .and_then(|c| c.ecus)
        .ok_or_else(|| EcuDiffError::MissingField {
            field: "protocol.vehicle.communications.ecus.ecu".to_string(),
            context: "XML document".to_string(),
        })?;

    let records = ecus
        .ecu
        .into_iter()
        .map(into_record)
        .collect::<Result<Vec<_>>>()?;
    Ok(Snapshot::from_records(records))
}

fn into_record(ecu: EcuXml) -> Result<EcuRecord> {
    let id = ecu.ecu_id.ok_or_else(|| EcuDiffError::MissingField {
        field: "ecu_id".to_string(),
        context: "ECU record".to_string(),
    })?;

    let blocks = ecu
        .ecu_master
        .into_iter()
        .filter_map(|block| block_from_tag(block.kind.as_deref(), into_node(block.values), &id))
        .collect();

    Ok(EcuRecord {
        id,
        name: ecu.ecu_name,
        blocks,
    })
}

/// One element becomes a single node, several become a collection
fn into_node(mut values: Vec<ValuesXml>) -> Node {
    if values.len() == 1 {
        if let Some(only) = values.pop() {
            return into_member(only);
        }
    }
    Node::Collection(values.into_iter().map(into_member).collect())
}

/// An element with nested `values` is a group, anything else a coding item
fn into_member(value: ValuesXml) -> Node {
    if value.values.is_empty() {
        Node::Leaf(CodingItem {
            display_name: value.display_name,
            hex_value: value.hex_value,
            bin_value: value.bin_value,
            display_value: value.display_value,
        })
    } else {
        Node::Group(AdaptionGroup::new(value.display_name, into_node(value.values)))
    }
}
