//! SQLite store contract tests.

use cordiad::store::sqlite::SqliteStorage;
use cordiad::store::{NewContact, Storage};
use std::sync::Arc;

async fn seeded_store() -> SqliteStorage {
    let store = SqliteStorage::new(":memory:")
        .await
        .expect("Failed to open in-memory database");
    assert!(store.seed_if_empty().await.expect("Failed to seed"));
    store
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let store = seeded_store().await;
    // Second seed must be a no-op on a populated database.
    assert!(!store.seed_if_empty().await.expect("Failed to reseed"));

    let (_, total) = store.list_news_articles(1, 10).await.unwrap();
    assert_eq!(total, 10);
}

#[tokio::test]
async fn news_pagination_contract() {
    let store = seeded_store().await;

    let (page1, total) = store.list_news_articles(1, 3).await.unwrap();
    assert_eq!(total, 10);
    assert_eq!(page1.len(), 3);
    assert!(page1[0].published_date >= page1[1].published_date);
    assert!(page1[1].published_date >= page1[2].published_date);

    // Total is invariant across pages; the last partial page is short.
    let (page4, total4) = store.list_news_articles(4, 3).await.unwrap();
    assert_eq!(total4, 10);
    assert_eq!(page4.len(), 1);

    // Past the end: empty, not an error, total unchanged.
    let (beyond, total_beyond) = store.list_news_articles(99, 3).await.unwrap();
    assert!(beyond.is_empty());
    assert_eq!(total_beyond, 10);
}

#[tokio::test]
async fn research_pagination_contract() {
    let store = seeded_store().await;

    let (papers, total) = store.list_research_papers(1, 10).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(papers.len(), 3);
    // Newest publication first.
    assert_eq!(papers[0].id, "3");
    assert_eq!(papers[2].id, "1");
}

#[tokio::test]
async fn absent_keys_are_none_not_errors() {
    let store = seeded_store().await;

    assert!(store.get_news_article("missing").await.unwrap().is_none());
    assert!(store.get_research_paper("missing").await.unwrap().is_none());
    assert!(
        store
            .get_initiative("unknown-slug")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn initiative_lookup_is_by_slug() {
    let store = seeded_store().await;

    let initiative = store
        .get_initiative("k-beauty")
        .await
        .unwrap()
        .expect("k-beauty should be seeded");
    assert_eq!(initiative.title, "K-Beauty Initiative");
    assert_eq!(initiative.id, "2");

    // Ids are not slugs.
    assert!(store.get_initiative("2").await.unwrap().is_none());
}

#[tokio::test]
async fn contact_roundtrip_orders_newest_first() {
    let store = seeded_store().await;

    let first = store
        .create_contact(NewContact {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "Hi".into(),
        })
        .await
        .unwrap();

    // created_at has second granularity in the database.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let second = store
        .create_contact(NewContact {
            name: "John".into(),
            email: "john@x.com".into(),
            message: "Hello".into(),
        })
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    let contacts = store.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, second.id);
    assert_eq!(contacts[1].id, first.id);
}

#[tokio::test]
async fn increment_views_unknown_id_is_a_noop() {
    let store = seeded_store().await;

    store
        .increment_research_paper_views("does-not-exist")
        .await
        .unwrap();

    let paper = store.get_research_paper("1").await.unwrap().unwrap();
    assert_eq!(paper.views, 1200);
}

#[tokio::test]
async fn concurrent_increments_are_not_lost() {
    let store = Arc::new(seeded_store().await);
    let before = store.get_research_paper("2").await.unwrap().unwrap().views;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.increment_research_paper_views("2").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let after = store.get_research_paper("2").await.unwrap().unwrap().views;
    assert_eq!(after, before + 20);
}

#[tokio::test]
async fn file_backed_database_persists_across_reopens() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("cordia-test.db");
    let path = path.to_str().expect("utf-8 path");

    {
        let store = SqliteStorage::new(path).await.expect("Failed to open");
        store
            .create_contact(NewContact {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "Persist me".into(),
            })
            .await
            .unwrap();
    }

    let reopened = SqliteStorage::new(path).await.expect("Failed to reopen");
    let contacts = reopened.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].message, "Persist me");
}
