use super::*;

#[test]
fn unavailable_comments_show_one_fixed_sentence() {
    let notice = comments_notice(&ApiError::Unavailable("comments"));
    assert_eq!(notice, "Comments are coming soon.");
    assert!(notice.starts_with(char::is_uppercase));
    assert_eq!(notice.matches("coming soon").count(), 1);
}

#[test]
fn other_failures_do_not_claim_the_feature_is_missing() {
    let notice = comments_notice(&ApiError::Network("offline".to_owned()));
    assert_eq!(notice, "Comments could not be loaded.");
}
