//! Tests for the content repository service.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::CategoryIcon;
use crate::domain::ports::{CategoryLinkRecord, MockContentStore};

fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn post_record(slug: &str, created_at: DateTime<Utc>) -> PostRecord {
    PostRecord {
        id: created_at.timestamp(),
        slug: slug.to_owned(),
        created_at,
        title: format!("Title of {slug}"),
        content: "Some *content*".to_owned(),
        cover_image: None,
        image_caption: None,
        category_id: None,
        category: None,
    }
}

fn rust_category() -> CategoryRecord {
    CategoryRecord {
        id: 10,
        slug: "rust".to_owned(),
        icon: "Code".to_owned(),
    }
}

fn slugs(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(Post::slug).collect()
}

#[tokio::test]
async fn list_posts_orders_newest_first() {
    let mut store = MockContentStore::new();
    store
        .expect_select_posts()
        .with(eq(None))
        .times(1)
        .return_once(|_| {
            Ok(vec![
                post_record("b", day(1)),
                post_record("a", day(2)),
                post_record("c", day(3)),
            ])
        });

    let repository = ContentRepositoryService::new(Arc::new(store));
    let posts = repository.list_posts().await.expect("posts load");

    assert_eq!(slugs(&posts), ["c", "a", "b"]);
}

#[tokio::test]
async fn list_posts_resolves_and_drops_category_references() {
    let mut joined = post_record("joined", day(2));
    joined.category = Some(CategoryLinkRecord {
        slug: Some("rust".to_owned()),
        icon: Some("Code".to_owned()),
    });
    let mut dangling = post_record("dangling", day(1));
    dangling.category_id = Some(42);
    dangling.category = Some(CategoryLinkRecord {
        slug: None,
        icon: None,
    });

    let mut store = MockContentStore::new();
    store
        .expect_select_posts()
        .return_once(move |_| Ok(vec![joined, dangling]));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let posts = repository.list_posts().await.expect("posts load");

    let first = posts.first().and_then(Post::category).expect("joined reference");
    assert_eq!(first.slug(), "rust");
    assert_eq!(first.icon(), &CategoryIcon::Code);
    assert!(posts.get(1).is_some_and(|post| post.category().is_none()));
}

#[tokio::test]
async fn list_posts_skips_invalid_rows() {
    let mut broken = post_record("broken", day(3));
    broken.title = String::new();

    let mut store = MockContentStore::new();
    store
        .expect_select_posts()
        .return_once(move |_| Ok(vec![broken, post_record("fine", day(1))]));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let posts = repository.list_posts().await.expect("posts load");

    assert_eq!(slugs(&posts), ["fine"]);
}

#[tokio::test]
async fn list_posts_maps_store_failures_to_transport() {
    let mut store = MockContentStore::new();
    store
        .expect_select_posts()
        .return_once(|_| Err(ContentStoreError::timeout("30s elapsed")));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let error = repository.list_posts().await.expect_err("store failed");

    assert!(matches!(error, ContentRepositoryError::Transport { .. }));
}

#[tokio::test]
async fn list_posts_by_category_queries_with_category_id() {
    let mut store = MockContentStore::new();
    store
        .expect_select_category_by_slug()
        .withf(|slug: &str| slug == "rust")
        .times(1)
        .return_once(|_| Ok(Some(rust_category())));
    store
        .expect_select_posts()
        .with(eq(Some(10)))
        .times(1)
        .return_once(|_| Ok(vec![post_record("old", day(1)), post_record("new", day(5))]));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let posts = repository
        .list_posts_by_category("rust")
        .await
        .expect("category posts load");

    assert_eq!(slugs(&posts), ["new", "old"]);
}

#[tokio::test]
async fn list_posts_by_unknown_category_is_not_found() {
    let mut store = MockContentStore::new();
    store
        .expect_select_category_by_slug()
        .return_once(|_| Ok(None));
    store.expect_select_posts().times(0);

    let repository = ContentRepositoryService::new(Arc::new(store));
    let error = repository
        .list_posts_by_category("missing")
        .await
        .expect_err("unknown category");

    assert_eq!(
        error,
        ContentRepositoryError::not_found(ContentKind::Category, "missing")
    );
}

#[tokio::test]
async fn category_listing_allows_empty_categories() {
    let mut store = MockContentStore::new();
    store
        .expect_select_category_by_slug()
        .return_once(|_| Ok(Some(rust_category())));
    store.expect_select_posts().return_once(|_| Ok(Vec::new()));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let listing = repository
        .get_category_listing("rust")
        .await
        .expect("listing loads");

    assert_eq!(listing.category.slug(), "rust");
    assert!(listing.posts.is_empty());
}

#[tokio::test]
async fn get_post_by_slug_returns_the_post() {
    let mut store = MockContentStore::new();
    store
        .expect_select_post_by_slug()
        .withf(|slug: &str| slug == "hello")
        .times(1)
        .return_once(|_| Ok(Some(post_record("hello", day(4)))));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let post = repository
        .get_post_by_slug("hello")
        .await
        .expect("post loads");

    assert_eq!(post.slug(), "hello");
    assert_eq!(post.created_at(), day(4));
}

#[tokio::test]
async fn get_post_by_missing_slug_is_not_found() {
    let mut store = MockContentStore::new();
    store
        .expect_select_post_by_slug()
        .return_once(|_| Ok(None));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let error = repository
        .get_post_by_slug("ghost")
        .await
        .expect_err("missing post");

    assert_eq!(error, ContentRepositoryError::not_found(ContentKind::Post, "ghost"));
}

#[rstest]
#[case("")]
#[case("has space")]
#[case("nested/slug")]
#[tokio::test]
async fn impossible_slugs_skip_the_store(#[case] slug: &str) {
    let mut store = MockContentStore::new();
    store.expect_select_post_by_slug().times(0);
    store.expect_select_category_by_slug().times(0);

    let repository = ContentRepositoryService::new(Arc::new(store));

    let post_error = repository
        .get_post_by_slug(slug)
        .await
        .expect_err("invalid slug");
    assert!(matches!(post_error, ContentRepositoryError::NotFound { .. }));

    let category_error = repository
        .get_category_by_slug(slug)
        .await
        .expect_err("invalid slug");
    assert!(matches!(
        category_error,
        ContentRepositoryError::NotFound { .. }
    ));
}

#[tokio::test]
async fn invalid_single_row_surfaces_as_transport() {
    let mut record = post_record("hello", day(4));
    record.title = "  ".to_owned();
    let mut store = MockContentStore::new();
    store
        .expect_select_post_by_slug()
        .return_once(move |_| Ok(Some(record)));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let error = repository
        .get_post_by_slug("hello")
        .await
        .expect_err("invalid row");

    assert!(matches!(error, ContentRepositoryError::Transport { .. }));
}

#[tokio::test]
async fn get_category_by_slug_maps_record() {
    let mut store = MockContentStore::new();
    store
        .expect_select_category_by_slug()
        .return_once(|_| Ok(Some(rust_category())));

    let repository = ContentRepositoryService::new(Arc::new(store));
    let category = repository
        .get_category_by_slug("rust")
        .await
        .expect("category loads");

    assert_eq!(category.id(), 10);
    assert_eq!(category.icon(), &CategoryIcon::Code);
}
