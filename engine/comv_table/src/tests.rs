use crate::{Table, TableError};
use pretty_assertions::assert_eq;

fn grid(rows: &[&[i32]]) -> Table<i32> {
    Table::from_rows(rows.iter().map(|r| r.iter().copied())).unwrap()
}

// === Construction ===

#[test]
fn new_table_is_empty() {
    let table: Table<String> = Table::new();
    assert_eq!(table.rows(), 0);
    assert_eq!(table.cols(), 0);
    assert!(table.is_empty());
}

#[test]
fn from_rows_keeps_row_major_order() {
    let table = grid(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(table.rows(), 2);
    assert_eq!(table.cols(), 3);
    assert_eq!(table.as_slice(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let err = Table::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        err,
        TableError::RaggedRow {
            row: 1,
            found: 1,
            expected: 2
        }
    );
}

#[test]
fn with_shape_fills_defaults() {
    let table: Table<u8> = Table::with_shape(2, 3);
    assert_eq!(table.len(), 6);
    assert!(table.iter().all(|&c| c == 0));
}

// === Bounds ===

#[test]
fn get_inside_extent() {
    let table = grid(&[&[1, 2], &[3, 4]]);
    assert_eq!(table.get(1, 0), Ok(&3));
}

#[test]
fn get_past_last_column_fails() {
    let table = grid(&[&[1, 2], &[3, 4]]);
    assert_eq!(
        table.get(0, 2),
        Err(TableError::OutOfRange {
            row: 0,
            col: 2,
            rows: 2,
            cols: 2
        })
    );
}

#[test]
fn get_past_last_row_fails() {
    let table = grid(&[&[1, 2]]);
    assert!(matches!(
        table.get(1, 0),
        Err(TableError::OutOfRange { row: 1, .. })
    ));
}

#[test]
fn set_does_not_grow() {
    let mut table = grid(&[&[1]]);
    assert!(table.set(0, 1, 9).is_err());
    assert_eq!(table.cols(), 1);
    table.set(0, 0, 9).unwrap();
    assert_eq!(table.get(0, 0), Ok(&9));
}

#[test]
fn linear_matches_row_col() {
    let table = grid(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(table.linear(4), table.get(1, 1));
    assert_eq!(
        table.linear(6),
        Err(TableError::LinearOutOfRange { index: 6, len: 6 })
    );
}

// === Growth ===

#[test]
fn push_grows_empty_table() {
    let mut table = Table::new();
    table.push(0, 0, "a".to_string());
    assert_eq!((table.rows(), table.cols()), (1, 1));
    assert_eq!(table.get(0, 0).unwrap(), "a");
}

#[test]
fn push_new_row_keeps_existing_cells() {
    let mut table = grid(&[&[1, 2]]);
    table.push(2, 1, 7);
    assert_eq!(table.as_slice(), &[1, 2, 0, 0, 0, 7]);
}

#[test]
fn push_new_column_restrides_existing_rows() {
    // Row-by-row population of a CSV file: the first row decides nothing
    // about the width until its last cell lands.
    let mut table = Table::new();
    table.push(0, 0, 1);
    table.push(1, 0, 3);
    table.push(0, 1, 2);
    table.push(1, 1, 4);
    assert_eq!(table.get(0, 0), Ok(&1));
    assert_eq!(table.get(0, 1), Ok(&2));
    assert_eq!(table.get(1, 0), Ok(&3));
    assert_eq!(table.get(1, 1), Ok(&4));
}

#[test]
fn grow_never_shrinks() {
    let mut table = grid(&[&[1, 2], &[3, 4]]);
    table.grow(1, 1);
    assert_eq!((table.rows(), table.cols()), (2, 2));
    assert_eq!(table.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn grow_both_axes() {
    let mut table = grid(&[&[1, 2], &[3, 4]]);
    table.grow(3, 3);
    assert_eq!(table.as_slice(), &[1, 2, 0, 3, 4, 0, 0, 0, 0]);
}

// === Iteration ===

#[test]
fn iter_rows_yields_each_row() {
    let table = grid(&[&[1, 2], &[3, 4], &[5, 6]]);
    let rows: Vec<&[i32]> = table.iter_rows().collect();
    assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
}

#[test]
fn iter_rows_on_zero_width_table() {
    let mut table: Table<i32> = Table::new();
    table.grow(2, 0);
    assert_eq!(table.iter_rows().len(), 2);
    assert!(table.iter_rows().all(<[i32]>::is_empty));
}

#[test]
fn into_iterator_is_row_major() {
    let table = grid(&[&[1, 2], &[3, 4]]);
    let flat: Vec<i32> = (&table).into_iter().copied().collect();
    assert_eq!(flat, vec![1, 2, 3, 4]);
}

mod proptest_growth {
    use crate::Table;
    use proptest::prelude::*;
    use std::collections::HashMap;

    proptest! {
        #[test]
        fn push_preserves_every_written_cell(
            writes in proptest::collection::vec((0usize..12, 0usize..12, any::<u32>()), 0..64)
        ) {
            let mut table = Table::new();
            let mut model = HashMap::new();
            for &(row, col, value) in &writes {
                table.push(row, col, value);
                model.insert((row, col), value);
            }

            prop_assert_eq!(table.len(), table.rows() * table.cols());
            for row in 0..table.rows() {
                for col in 0..table.cols() {
                    let expected = model.get(&(row, col)).copied().unwrap_or_default();
                    prop_assert_eq!(*table.get(row, col).unwrap(), expected);
                }
            }
        }
    }
}
