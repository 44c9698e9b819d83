use futures::executor::block_on;

use super::*;
use crate::test_support::Fixture;

#[test]
fn every_comment_call_fails_fast_without_requests() {
    let fx = Fixture::new();
    let comments = fx.services.comments;
    let draft = NewComment { content: "Nice".to_owned() };

    assert_eq!(block_on(comments.for_article("a1")), Err(ApiError::Unavailable("comments")));
    assert_eq!(block_on(comments.create("a1", &draft)), Err(ApiError::Unavailable("comments")));
    assert_eq!(block_on(comments.delete("a1", "c1")), Err(ApiError::Unavailable("comments")));
    assert_eq!(fx.transport.request_count(), 0);
}
