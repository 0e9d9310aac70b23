use super::*;

#[test]
fn test_split_owner_repo() {
    let (owner, repo) = split_owner_repo("rust-lang/rust").expect("Expected a valid split");

    assert_eq!(owner, "rust-lang");
    assert_eq!(repo, "rust");
}

#[test]
fn test_missing_separator_is_rejected() {
    let result = split_owner_repo("rust-lang");

    assert!(matches!(result, Err(Error::InvalidRepository(_))));
}

#[test]
fn test_empty_segments_are_rejected() {
    assert!(split_owner_repo("/rust").is_err());
    assert!(split_owner_repo("rust-lang/").is_err());
    assert!(split_owner_repo("/").is_err());
    assert!(split_owner_repo("").is_err());
}

#[test]
fn test_extra_segments_are_rejected() {
    let result = split_owner_repo("rust-lang/rust/tree/master");

    assert!(matches!(result, Err(Error::InvalidRepository(_))));
}
