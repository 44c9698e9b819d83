use super::*;
use crate::test_support::make_article;

#[test]
fn content_preview_keeps_first_150_chars() {
    let body = "x".repeat(400);
    assert_eq!(content_preview(&body).len(), 150);
    assert_eq!(content_preview("short"), "short");
}

#[test]
fn remove_article_drops_only_matching_id() {
    let mut list = vec![make_article("1", "a"), make_article("2", "a"), make_article("3", "b")];
    remove_article(&mut list, "2");
    let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn remove_article_ignores_unknown_id() {
    let mut list = vec![make_article("1", "a")];
    remove_article(&mut list, "9");
    assert_eq!(list.len(), 1);
}

#[test]
fn only_the_row_being_deleted_is_busy() {
    assert!(is_row_deleting(Some("2"), "2"));
    assert!(!is_row_deleting(Some("2"), "3"));
    assert!(!is_row_deleting(None, "2"));
}
