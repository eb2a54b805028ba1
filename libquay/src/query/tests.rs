use super::*;

#[test]
fn test_query_value_display() {
    assert_eq!(QueryValue::Bool(true).to_string(), "true");
    assert_eq!(QueryValue::Bool(false).to_string(), "false");
    assert_eq!(QueryValue::Int(25).to_string(), "25");
    assert_eq!(QueryValue::from("latest").to_string(), "latest");
}

#[test]
fn test_query_set_replaces_in_place() {
    let mut query = Query::new();
    query.set(ONLY_ACTIVE_TAGS, Some(true.into()));
    query.set(PAGE, Some(1i64.into()));
    query.set(ONLY_ACTIVE_TAGS, Some(false.into()));

    assert_eq!(
        query.encoded_pairs(),
        vec![
            (ONLY_ACTIVE_TAGS, "false".to_string()),
            (PAGE, "1".to_string())
        ]
    );
}

#[test]
fn test_query_null_values_are_present_but_not_encoded() {
    let mut query = Query::new();
    query.set(PAGE, None);

    assert!(query.contains_key(PAGE));
    assert_eq!(query.len(), 1);
    assert!(query.encoded_pairs().is_empty());
}

#[test]
fn test_validate_rejects_blank_repository() {
    assert!(TagQuery::new("").validate().is_err());
    assert!(TagQuery::new("   ").validate().is_err());
    assert!(TagQuery::new("acme/widgets").validate().is_ok());
}

#[test]
fn test_validate_error_is_params() {
    let err = TagQuery::new("").validate().unwrap_err();
    assert!(matches!(err, QuayError::Params { .. }));
}

#[test]
fn test_sparse_without_filters_is_empty() {
    let query = TagQuery::new("acme/widgets").sparse(LimitMapping::Limit);
    assert!(query.is_empty());
}

#[test]
fn test_sparse_sends_false_only_active_tags() {
    let query = TagQuery::new("acme/widgets")
        .with_only_active_tags(false)
        .sparse(LimitMapping::Limit);

    assert_eq!(
        query.get(ONLY_ACTIVE_TAGS),
        Some(&Some(QueryValue::Bool(false)))
    );
}

#[test]
fn test_sparse_omits_absent_only_active_tags() {
    let query = TagQuery::new("acme/widgets")
        .with_page(1)
        .sparse(LimitMapping::Limit);

    assert!(!query.contains_key(ONLY_ACTIVE_TAGS));
}

#[test]
fn test_sparse_specific_tag() {
    let query = TagQuery::new("acme/widgets")
        .with_specific_tag("latest")
        .sparse(LimitMapping::Limit);

    assert_eq!(
        query.encoded_pairs(),
        vec![(SPECIFIC_TAG, "latest".to_string())]
    );
}

#[test]
fn test_sparse_limit_mapping_sends_limit() {
    let query = TagQuery::new("acme/widgets")
        .with_page(2)
        .with_limit(5)
        .sparse(LimitMapping::Limit);

    assert_eq!(
        query.encoded_pairs(),
        vec![(PAGE, "2".to_string()), (LIMIT, "5".to_string())]
    );
}

#[test]
fn test_sparse_legacy_mapping_reassigns_page() {
    let query = TagQuery::new("acme/widgets")
        .with_page(2)
        .with_limit(5)
        .sparse(LimitMapping::Legacy);

    assert!(!query.contains_key(LIMIT));
    assert_eq!(query.encoded_pairs(), vec![(PAGE, "2".to_string())]);
}

#[test]
fn test_sparse_legacy_mapping_without_page_leaves_null_page() {
    let query = TagQuery::new("acme/widgets")
        .with_limit(5)
        .sparse(LimitMapping::Legacy);

    assert_eq!(query.get(PAGE), Some(&None));
    assert!(query.encoded_pairs().is_empty());
}

#[test]
fn test_dense_always_has_every_key() {
    let query = TagQuery::new("acme/widgets").dense();

    assert_eq!(query.len(), 4);
    for key in [ONLY_ACTIVE_TAGS, PAGE, LIMIT, SPECIFIC_TAG] {
        assert_eq!(query.get(key), Some(&None), "key {}", key);
    }
    assert!(query.encoded_pairs().is_empty());
}

#[test]
fn test_dense_maps_limit_to_limit() {
    let query = TagQuery::new("acme/widgets")
        .with_only_active_tags(true)
        .with_page(3)
        .with_limit(50)
        .with_specific_tag("v1")
        .dense();

    assert_eq!(
        query.encoded_pairs(),
        vec![
            (ONLY_ACTIVE_TAGS, "true".to_string()),
            (PAGE, "3".to_string()),
            (LIMIT, "50".to_string()),
            (SPECIFIC_TAG, "v1".to_string()),
        ]
    );
}

#[test]
fn test_limit_mapping_deserializes_lowercase() {
    let mapping: LimitMapping = serde_json::from_str("\"legacy\"").unwrap();
    assert_eq!(mapping, LimitMapping::Legacy);
    assert_eq!(LimitMapping::default(), LimitMapping::Limit);
}
