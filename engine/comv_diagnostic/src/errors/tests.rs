use super::*;

#[test]
fn test_get_existing_doc() {
    let doc = ErrorDocs::get(ErrorCode::E0005);
    assert!(doc.is_some_and(|d| d.contains("Unknown Predicate")));
}

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::get(*code).is_some(), "{code} has no documentation");
    }
}

#[test]
fn test_docs_start_with_their_code() {
    for &code in ErrorCode::ALL {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc must open with its heading"
        );
    }
}

#[test]
fn test_ragged_row_doc_explains_the_hash() {
    let doc = ErrorDocs::get(ErrorCode::E1005).unwrap_or_default();
    assert!(doc.contains("empty string"));
}
