use super::*;
use clap::error::ErrorKind;

#[test]
fn test_legacy_limit_conflicts_with_unsorted() {
    let err = Cli::try_parse_from(["quay", "tags", "acme/widgets", "--unsorted", "--legacy-limit"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_legacy_limit_with_sorted_listing() {
    let cli = Cli::try_parse_from(["quay", "tags", "acme/widgets", "--limit", "5", "--legacy-limit"])
        .unwrap();

    match cli.command {
        Commands::Tags {
            legacy_limit,
            unsorted,
            limit,
            ..
        } => {
            assert!(legacy_limit);
            assert!(!unsorted);
            assert_eq!(limit, Some(5));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
