use comv_ir::{ColumnLayout, PublicValue};
use comv_seal::SealScheme;
use comv_table::Table;
use pretty_assertions::assert_eq;

use super::{open_all, raw, scheme};
use crate::{classify, classify_all, encode_cell, ClassifyError, RecordError};

// === Splitting ===

#[test]
fn splits_public_and_protected_halves() {
    let scheme = scheme();
    let layout = ColumnLayout::new([0, 3]);
    let record = classify(&layout, &raw(&[&["A", "10", "7", "B"]]), &scheme).unwrap();

    assert_eq!(record.public.cols(), 2);
    assert_eq!(
        record.public.iter_rows().next().unwrap(),
        &[PublicValue::from("A"), PublicValue::from("B")]
    );
    assert_eq!(record.protected.cols(), 2);
    assert_eq!(open_all(&scheme, record.protected.as_slice()), vec![10, 7]);
}

#[test]
fn public_cursor_resets_every_row() {
    let scheme = scheme();
    let layout = ColumnLayout::new([0, 2]);
    let table = raw(&[&["A", "1", "x", "2"], &["B", "3", "y", "4"]]);
    let record = classify(&layout, &table, &scheme).unwrap();

    assert_eq!(record.rows(), 2);
    assert_eq!(record.public.get(1, 0).unwrap().as_str(), "B");
    assert_eq!(record.public.get(1, 1).unwrap().as_str(), "y");
    assert_eq!(open_all(&scheme, record.protected.as_slice()), vec![1, 2, 3, 4]);
}

#[test]
fn all_public_record_keeps_row_count() {
    let scheme = scheme();
    let record = classify(&ColumnLayout::new([0]), &raw(&[&["A"], &["B"]]), &scheme).unwrap();
    assert_eq!(record.rows(), 2);
    assert_eq!(record.protected.rows(), 2);
    assert_eq!(record.protected.cols(), 0);
}

#[test]
fn empty_table_gives_empty_record() {
    let record = classify(&ColumnLayout::new([0]), &Table::new(), &scheme()).unwrap();
    assert_eq!(record.rows(), 0);
    assert!(record.protected.is_empty());
}

// === Encoding ===

#[test]
fn non_numeric_cells_hash_deterministically() {
    let layout = ColumnLayout::default();
    let table = raw(&[&["alice", "-5"]]);
    let first = scheme();
    let other = comv_seal::MaskScheme::from_seed(first.plain_modulus(), 9).unwrap();

    let a = classify(&layout, &table, &first).unwrap();
    let b = classify(&layout, &table, &other).unwrap();
    assert_eq!(
        open_all(&first, a.protected.as_slice()),
        open_all(&other, b.protected.as_slice())
    );
    assert_eq!(
        first.open(a.protected.get(0, 0).unwrap()).unwrap(),
        encode_cell("alice", 0, 0, first.plain_modulus()).unwrap()
    );
}

#[test]
fn hashed_cells_stay_below_modulus() {
    for text in ["alice", "bob", "", "-1", "1.5"] {
        assert!(encode_cell(text, 0, 0, 97).unwrap() < 97);
    }
}

#[test]
fn numeric_overflow_is_reported() {
    let err = classify(
        &ColumnLayout::default(),
        &raw(&[&["1"], &["99999999999999999999"]]),
        &scheme(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ClassifyError::NumericOverflow {
            row: 1,
            col: 0,
            text: "99999999999999999999".into()
        }
    );
}

#[test]
fn unreduced_value_is_a_capability_error() {
    let err = classify(&ColumnLayout::default(), &raw(&[&["2000000"]]), &scheme()).unwrap_err();
    assert!(matches!(err, ClassifyError::Seal(_)));
}

#[test]
fn missing_public_column_is_reported() {
    let err = classify(&ColumnLayout::new([4]), &raw(&[&["A", "1"]]), &scheme()).unwrap_err();
    assert_eq!(err, ClassifyError::MissingColumn { column: 5, width: 2 });
}

// === Many files ===

#[test]
fn classify_all_keeps_file_order() {
    let scheme = scheme();
    let layout = ColumnLayout::new([0]);
    let tables = vec![raw(&[&["A", "1"]]), raw(&[&["B", "2"]]), raw(&[&["C", "3"]])];

    for parallel in [false, true] {
        let records = classify_all(&layout, &tables, &scheme, parallel).unwrap();
        let keys: Vec<&str> = records
            .iter()
            .map(|r| r.public.get(0, 0).unwrap().as_str())
            .collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        let values: Vec<u64> = records
            .iter()
            .flat_map(|r| open_all(&scheme, r.protected.as_slice()))
            .collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}

#[test]
fn classify_all_reports_lowest_failing_file() {
    let layout = ColumnLayout::new([1]);
    let tables = vec![raw(&[&["1", "A"]]), raw(&[&["1"]]), raw(&[&["2"]])];
    let err = classify_all(&layout, &tables, &scheme(), true).unwrap_err();
    assert_eq!(
        err,
        RecordError {
            file: 1,
            error: ClassifyError::MissingColumn { column: 2, width: 1 }
        }
    );
}

mod proptest_classify {
    use super::super::{open_all, scheme};
    use crate::classify;
    use comv_ir::ColumnLayout;
    use comv_seal::DEFAULT_PLAIN_MODULUS;
    use comv_table::Table;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn numeric_cells_open_to_their_value(
            values in proptest::collection::vec(0u64..DEFAULT_PLAIN_MODULUS, 1..24),
            cols in 1usize..4,
        ) {
            let rows: Vec<Vec<String>> = values
                .chunks(cols)
                .filter(|chunk| chunk.len() == cols)
                .map(|chunk| chunk.iter().map(ToString::to_string).collect())
                .collect();
            let expected: Vec<u64> = values.iter().copied().take(rows.len() * cols).collect();
            let table = Table::from_rows(rows).unwrap();

            let scheme = scheme();
            let record = classify(&ColumnLayout::default(), &table, &scheme).unwrap();
            prop_assert_eq!(open_all(&scheme, record.protected.as_slice()), expected);
        }
    }
}
