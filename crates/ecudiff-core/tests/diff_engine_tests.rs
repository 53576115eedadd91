//! Diff engine and report assembler scenarios.
//!
//! All tests operate on in-memory snapshots (no I/O).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecudiff_core::diff::{diff, diff_adaptions, DiffRow};
use ecudiff_core::{
    compare, AdaptionGroup, Block, BlockAlignment, BlockKind, CodingItem, DiffOptions,
    EcuRecord, Node, Snapshot,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn opts() -> DiffOptions {
    DiffOptions::default()
}

fn instruments(blocks: Vec<Block>) -> EcuRecord {
    blocks
        .into_iter()
        .fold(EcuRecord::new("0017", "Instruments"), EcuRecord::with_block)
}

fn single(record: EcuRecord) -> Snapshot {
    Snapshot::from_records(vec![record])
}

// ---------------------------------------------------------------------------
// Leaf and collection rules
// ---------------------------------------------------------------------------

#[test]
fn test_speed_unit_change_yields_one_row() {
    let base = Node::items(vec![CodingItem::text("Speed Unit", "km/h")]);
    let other = Node::items(vec![CodingItem::text("Speed Unit", "mph")]);

    let table = diff(&base, &other, "Coding", &opts()).unwrap();

    assert_eq!(table.title, "Coding");
    assert_eq!(
        table.rows,
        vec![DiffRow::new("Speed Unit", Some("km/h"), Some("mph"))]
    );
}

#[test]
fn test_identical_binary_values_yield_no_row() {
    let base = Node::items(vec![CodingItem::binary("Byte 0", "0x01", "00000001")]);
    let other = Node::items(vec![CodingItem::binary("Byte 0", "0x01", "00000001")]);
    assert!(diff(&base, &other, "Coding", &opts()).is_none());
}

#[test]
fn test_binary_rule_uses_bin_value() {
    let base = Node::items(vec![CodingItem::binary("Byte 2", "0x02", "00000010")]);
    let other = Node::items(vec![CodingItem::binary("Byte 2", "0x03", "00000011")]);

    let table = diff(&base, &other, "Coding", &opts()).unwrap();

    assert_eq!(
        table.rows,
        vec![DiffRow::new("Byte 2", Some("00000010"), Some("00000011"))]
    );
}

#[test]
fn test_other_only_text_item_reported_with_left_absent() {
    let base = Node::items(vec![CodingItem::text("Region", "EU")]);
    let other = Node::items(vec![
        CodingItem::text("Region", "EU"),
        CodingItem::text("Trailer", "installed"),
    ]);

    let table = diff(&base, &other, "Coding", &opts()).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].is_right_only());
    assert_eq!(table.rows[0].name, "Trailer");
}

#[test]
fn test_base_only_item_reported_with_right_absent() {
    let base = Node::items(vec![
        CodingItem::text("Region", "EU"),
        CodingItem::text("Trailer", "installed"),
    ]);
    let other = Node::items(vec![CodingItem::text("Region", "EU")]);

    let table = diff(&base, &other, "Coding", &opts()).unwrap();

    assert_eq!(
        table.rows,
        vec![DiffRow::new("Trailer", Some("installed"), None)]
    );
    assert!(table.rows[0].is_left_only());
}

#[test]
fn test_rows_sorted_by_name_regardless_of_input_order() {
    let base = Node::items(vec![
        CodingItem::text("Zeta", "1"),
        CodingItem::text("Alpha", "1"),
        CodingItem::text("Mid", "1"),
    ]);
    let other = Node::items(vec![
        CodingItem::text("Mid", "2"),
        CodingItem::text("Beta", "2"),
        CodingItem::text("Zeta", "2"),
        CodingItem::text("Alpha", "2"),
    ]);

    let table = diff(&base, &other, "Coding", &opts()).unwrap();
    let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["Alpha", "Beta", "Mid", "Zeta"]);
}

#[test]
fn test_duplicate_names_keep_last_item() {
    let base = Node::items(vec![
        CodingItem::text("Mode", "old"),
        CodingItem::text("Mode", "new"),
    ]);
    let other = Node::items(vec![CodingItem::text("Mode", "new")]);

    assert!(diff(&base, &other, "Coding", &opts()).is_none());
}

// ---------------------------------------------------------------------------
// Adaption sections
// ---------------------------------------------------------------------------

#[test]
fn test_group_missing_from_other_produces_no_table() {
    let base = Node::groups(vec![AdaptionGroup::new(
        "Airbag",
        Node::items(vec![CodingItem::text("Sensitivity", "High")]),
    )]);
    let other = Node::groups(vec![AdaptionGroup::new(
        "Lights",
        Node::items(vec![CodingItem::text("Brightness", "50")]),
    )]);

    assert!(diff_adaptions(&base, &other, &opts()).is_empty());
}

#[test]
fn test_one_table_per_changed_group() {
    let base = Node::groups(vec![
        AdaptionGroup::new(
            "Lights",
            Node::items(vec![CodingItem::text("Brightness", "50")]),
        ),
        AdaptionGroup::new("Horn", Node::items(vec![CodingItem::text("Volume", "3")])),
        AdaptionGroup::new("Wipers", Node::items(vec![CodingItem::text("Speed", "2")])),
    ]);
    let other = Node::groups(vec![
        AdaptionGroup::new("Horn", Node::items(vec![CodingItem::text("Volume", "3")])),
        AdaptionGroup::new(
            "Lights",
            Node::items(vec![CodingItem::text("Brightness", "80")]),
        ),
        AdaptionGroup::new("Wipers", Node::items(vec![CodingItem::text("Speed", "1")])),
    ]);

    let tables = diff_adaptions(&base, &other, &opts());
    let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(titles, vec!["Lights", "Wipers"]);
    assert_eq!(
        tables[0].rows,
        vec![DiffRow::new("Brightness", Some("50"), Some("80"))]
    );
}

#[test]
fn test_single_group_against_single_group() {
    let base = Node::Group(AdaptionGroup::new(
        "Horn",
        Node::Leaf(CodingItem::text("Volume", "3")),
    ));
    let other = Node::Group(AdaptionGroup::new(
        "Horn",
        Node::Leaf(CodingItem::text("Volume", "5")),
    ));

    let tables = diff_adaptions(&base, &other, &opts());

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].title, "Horn");
    assert_eq!(
        tables[0].rows,
        vec![DiffRow::new("Volume", Some("3"), Some("5"))]
    );
}

// ---------------------------------------------------------------------------
// Report assembly
// ---------------------------------------------------------------------------

#[test]
fn test_identical_identification_produces_no_section() {
    let ident = Block::identification(Node::items(vec![CodingItem::text("VIN", "X1")]));
    let base = single(instruments(vec![ident.clone()]));
    let other = single(instruments(vec![ident]));

    assert!(compare(&base, &other, &opts()).is_empty());
}

#[test]
fn test_report_groups_tables_under_ecu_and_section() {
    let base = single(instruments(vec![
        Block::identification(Node::items(vec![CodingItem::text("VIN", "X1")])),
        Block::coding(Node::items(vec![CodingItem::text("Speed Unit", "km/h")])),
    ]));
    let other = single(instruments(vec![
        Block::identification(Node::items(vec![CodingItem::text("VIN", "X2")])),
        Block::coding(Node::items(vec![CodingItem::text("Speed Unit", "mph")])),
    ]));

    let report = compare(&base, &other, &opts());

    assert_eq!(report.ecus.len(), 1);
    let ecu = &report.ecus[0];
    assert_eq!(ecu.heading(), "ECU 0017 - Instruments");
    let headings: Vec<&str> = ecu.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(
        headings,
        vec!["Master - 001 Identification", "Master - 006 Read Coding"]
    );
    assert_eq!(ecu.sections[0].tables[0].title, "Field");
    assert_eq!(ecu.sections[1].tables[0].title, "Coding");
    assert_eq!(report.table_count(), 2);
    assert_eq!(report.row_count(), 2);
}

#[test]
fn test_ecu_absent_from_other_contributes_nothing() {
    let coding = Block::coding(Node::items(vec![CodingItem::text("Region", "EU")]));
    let base = Snapshot::from_records(vec![
        EcuRecord::new("0001", "Engine").with_block(coding.clone()),
        EcuRecord::new("0017", "Instruments").with_block(coding),
    ]);
    let other = Snapshot::from_records(vec![EcuRecord::new("0017", "Instruments").with_block(
        Block::coding(Node::items(vec![CodingItem::text("Region", "US")])),
    )]);

    let report = compare(&base, &other, &opts());

    let ids: Vec<&str> = report.ecus.iter().map(|e| e.ecu_id.as_str()).collect();
    assert_eq!(ids, vec!["0017"]);
}

#[test]
fn test_ecus_reported_in_id_order() {
    let make = |id: &str, value: &str| {
        EcuRecord::new(id, "ECU").with_block(Block::coding(Node::items(vec![CodingItem::text(
            "Region", value,
        )])))
    };
    let base = Snapshot::from_records(vec![make("0044", "EU"), make("0003", "EU"), make("0017", "EU")]);
    let other = Snapshot::from_records(vec![make("0017", "US"), make("0044", "US"), make("0003", "US")]);

    let report = compare(&base, &other, &opts());
    let ids: Vec<&str> = report.ecus.iter().map(|e| e.ecu_id.as_str()).collect();

    assert_eq!(ids, vec!["0003", "0017", "0044"]);
}

#[test]
fn test_block_alignment_by_kind_tolerates_reordering() {
    let ident = Block::identification(Node::items(vec![CodingItem::text("VIN", "X1")]));
    let coding = Block::coding(Node::items(vec![CodingItem::text("Region", "EU")]));
    let base = single(instruments(vec![ident.clone(), coding.clone()]));
    let other = single(instruments(vec![coding, ident]));

    assert!(compare(&base, &other, &opts()).is_empty());

    let positional = DiffOptions {
        block_alignment: BlockAlignment::Positional,
        ..DiffOptions::default()
    };
    let report = compare(&base, &other, &positional);
    assert!(!report.is_empty());
}

#[test]
fn test_missing_adaption_block_is_not_an_error() {
    let adaptions = Block::adaptions(Node::groups(vec![AdaptionGroup::new(
        "Airbag",
        Node::items(vec![CodingItem::text("Sensitivity", "High")]),
    )]));
    let base = single(instruments(vec![adaptions]));
    let other = single(instruments(Vec::new()));

    assert!(compare(&base, &other, &opts()).is_empty());
}

#[test]
fn test_missing_coding_block_reports_base_items() {
    let base = single(instruments(vec![Block::coding(Node::items(vec![
        CodingItem::text("Region", "EU"),
    ]))]));
    let other = single(instruments(Vec::new()));

    let report = compare(&base, &other, &opts());

    let section = &report.ecus[0].sections[0];
    assert_eq!(section.kind, BlockKind::CodingSection);
    assert_eq!(
        section.tables[0].rows,
        vec![DiffRow::new("Region", Some("EU"), None)]
    );
}

#[test]
fn test_identity_carries_source_digests() {
    let base = Snapshot::new().with_source_digest("aaa");
    let other = Snapshot::new().with_source_digest("bbb");

    let report = compare(&base, &other, &opts());

    assert_eq!(report.identity.base_digest.as_deref(), Some("aaa"));
    assert_eq!(report.identity.other_digest.as_deref(), Some("bbb"));
    assert_eq!(report.report_schema_version, 1);
}
