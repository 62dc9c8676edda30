//! Post store integration tests
//!
//! Every scenario runs against the in-process collection. The `pg_` variants
//! run the same scenarios against PostgreSQL and are skipped unless
//! `DATABASE_URL` is set.
//!
//! Run with: cargo test -p integration-tests --test store_tests

use std::collections::HashSet;

use futures::future::join_all;
use integration_tests::{
    check_test_env, fixtures::*, memory_store, pg_store,
};
use post_core::{PostFilter, PostForm, PostId, StoreError, UserId, VoteState, VoteValue};
use post_service::PostStore;

// ============================================================================
// Scenarios
// ============================================================================

async fn vote_cycle(store: &PostStore) {
    let author = unique_author();
    let voter = unique_author();
    let post = store.make_post(&unique_text_form(), author.clone()).await.unwrap();
    assert_eq!((post.score, post.upvote_percentage), (1, 100));

    let post = store.vote_post(post.id, voter.id, VoteValue::Up).await.unwrap();
    assert_eq!((post.score, post.upvote_percentage, post.vote_count), (2, 100, 2));

    let post = store.vote_post(post.id, voter.id, VoteValue::Down).await.unwrap();
    assert_eq!((post.score, post.upvote_percentage, post.vote_count), (0, 50, 2));
    assert_eq!(post.vote_state(voter.id), VoteState::Downvoted);

    let post = store.unvote_post(post.id, voter.id).await.unwrap();
    assert_eq!((post.score, post.upvote_percentage, post.vote_count), (1, 100, 1));

    assert_eq!(
        store.unvote_post(post.id, voter.id).await,
        Err(StoreError::FailedUpdate)
    );
}

async fn ownership(store: &PostStore) {
    let author = unique_author();
    let stranger = unique_author();
    let post = store.make_post(&unique_text_form(), author.clone()).await.unwrap();

    let post = store
        .make_comment(post.id, "first".to_string(), stranger.clone())
        .await
        .unwrap();
    let comment_id = post.comments[0].id;

    assert_eq!(
        store.delete_comment(post.id, comment_id, author.id).await,
        Err(StoreError::FailedUpdate)
    );
    let post = store.delete_comment(post.id, comment_id, stranger.id).await.unwrap();
    assert!(!post.has_comment(comment_id));

    assert_eq!(store.delete_post(post.id, stranger.id).await, Err(StoreError::FailedDelete));
    assert_eq!(store.delete_post(post.id, author.id).await, Ok(true));
    assert_eq!(store.get_post(post.id).await, Err(StoreError::NotFound));
}

async fn listing(store: &PostStore) {
    let category = unique_name("category");
    let author = unique_author();
    let other = unique_author();

    let mut created = Vec::new();
    for (title, who) in [("one", &author), ("two", &other), ("three", &author)] {
        let form = PostForm::text(title, category.as_str(), "body");
        created.push(store.make_post(&form, who.clone()).await.unwrap().id);
    }
    store.make_post(&link_form("elsewhere"), author.clone()).await.unwrap();

    let in_category: Vec<PostId> = store
        .list_posts(&PostFilter::by_category(category.as_str()))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(in_category, created);

    let by_author = store
        .list_posts(&PostFilter::by_author(author.username.as_str()))
        .await
        .unwrap();
    assert_eq!(by_author.len(), 3);
    assert!(by_author.iter().all(|p| p.author.id == author.id));

    let all = store.list_posts(&PostFilter::All).await.unwrap();
    assert!(all.len() >= 4);
}

async fn concurrent_views(store: &PostStore) {
    let post = store
        .make_post(&unique_text_form(), unique_author())
        .await
        .unwrap();

    let reads = (0..20).map(|_| store.get_post(post.id));
    let views: HashSet<i64> = join_all(reads)
        .await
        .into_iter()
        .map(|r| r.unwrap().views)
        .collect();

    assert_eq!(views, (1..=20).collect::<HashSet<_>>());
}

async fn concurrent_comments(store: &PostStore) {
    let post = store
        .make_post(&unique_text_form(), unique_author())
        .await
        .unwrap();

    let writes = (0..10).map(|i| store.make_comment(post.id, format!("comment {i}"), unique_author()));
    for result in join_all(writes).await {
        result.unwrap();
    }

    let post = store.get_post(post.id).await.unwrap();
    assert_eq!(post.comments.len(), 10);
}

async fn concurrent_votes_keep_ledger_consistent(store: &PostStore) {
    let post = store
        .make_post(&unique_text_form(), unique_author())
        .await
        .unwrap();

    // Voters race on a blind replace: some votes may be lost, but whatever
    // document wins must be internally consistent.
    let voters: Vec<UserId> = (0..8).map(|_| unique_author().id).collect();
    let votes = voters.iter().enumerate().map(|(i, user)| {
        let value = if i % 2 == 0 { VoteValue::Up } else { VoteValue::Down };
        store.vote_post(post.id, *user, value)
    });
    for result in join_all(votes).await {
        assert!(matches!(result, Ok(_) | Err(StoreError::FailedUpdate)));
    }

    let post = store.get_post(post.id).await.unwrap();
    let sum: i64 = post.votes.iter().map(|v| v.vote.value()).sum();
    assert_eq!(post.score, sum);
    assert_eq!(post.vote_count, post.votes.len() as i64);
    assert_eq!(
        post.upvote_percentage,
        post.upvote_count * 100 / post.vote_count
    );
}

// ============================================================================
// In-process collection
// ============================================================================

#[tokio::test]
async fn test_vote_cycle() {
    vote_cycle(&memory_store()).await;
}

#[tokio::test]
async fn test_ownership_checks() {
    ownership(&memory_store()).await;
}

#[tokio::test]
async fn test_listing() {
    listing(&memory_store()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_views() {
    concurrent_views(&memory_store()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_comments() {
    concurrent_comments(&memory_store()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_votes_keep_ledger_consistent() {
    concurrent_votes_keep_ledger_consistent(&memory_store()).await;
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn pg_vote_cycle() {
    if !check_test_env() {
        return;
    }
    vote_cycle(&pg_store().await.expect("Failed to connect")).await;
}

#[tokio::test]
async fn pg_ownership_checks() {
    if !check_test_env() {
        return;
    }
    ownership(&pg_store().await.expect("Failed to connect")).await;
}

#[tokio::test]
async fn pg_listing() {
    if !check_test_env() {
        return;
    }
    listing(&pg_store().await.expect("Failed to connect")).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pg_concurrent_views() {
    if !check_test_env() {
        return;
    }
    concurrent_views(&pg_store().await.expect("Failed to connect")).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pg_concurrent_comments() {
    if !check_test_env() {
        return;
    }
    concurrent_comments(&pg_store().await.expect("Failed to connect")).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pg_concurrent_votes_keep_ledger_consistent() {
    if !check_test_env() {
        return;
    }
    concurrent_votes_keep_ledger_consistent(&pg_store().await.expect("Failed to connect")).await;
}
