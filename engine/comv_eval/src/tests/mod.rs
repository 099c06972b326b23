//! Evaluator tests, grouped by stage.

mod classify_tests;

use comv_parse::Script;
use comv_seal::{MaskScheme, SealScheme, DEFAULT_PLAIN_MODULUS};
use comv_table::Table;

use crate::{classify, Record};

pub(crate) type Sealed = <MaskScheme as SealScheme>::Ciphertext;

pub(crate) fn scheme() -> MaskScheme {
    MaskScheme::from_seed(DEFAULT_PLAIN_MODULUS, 42).unwrap()
}

pub(crate) fn raw(rows: &[&[&str]]) -> Table<String> {
    Table::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_owned())),
    )
    .unwrap()
}

pub(crate) fn script(body: &str) -> Script {
    let source = format!("comv\n{body}");
    comv_parse::parse(&comv_lexer::tokenize(source.as_bytes()).unwrap()).unwrap()
}

pub(crate) fn records(
    scheme: &MaskScheme,
    script: &Script,
    tables: &[Table<String>],
) -> Vec<Record<Sealed>> {
    tables
        .iter()
        .map(|table| classify(script.layout(), table, scheme).unwrap())
        .collect()
}

pub(crate) fn open_all(scheme: &MaskScheme, sealed: &[Sealed]) -> Vec<u64> {
    sealed.iter().map(|c| scheme.open(c).unwrap()).collect()
}

/// The two-party fixture: keys {A, B} and {A, C}, values {10, 20} and {30, 40}.
pub(crate) fn two_parties() -> Vec<Table<String>> {
    vec![
        raw(&[&["A", "10"], &["B", "20"]]),
        raw(&[&["A", "30"], &["C", "40"]]),
    ]
}
