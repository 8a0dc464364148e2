//! Repository Property Tests
//!
//! Randomized checks of id assignment, author filtering and concurrent use.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use quote_service::{InMemoryQuoteRepository, QuoteError, QuoteId, QuoteInput, QuoteRepository};

/// One step applied to a repository.
#[derive(Debug, Clone)]
enum Step {
    Add { author: String },
    Delete { id: u64 },
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => prop::sample::select(vec!["A1", "A2", "a1", "A1 ", ""])
            .prop_map(|a| Step::Add { author: a.to_string() }),
        1 => (1_u64..20).prop_map(|id| Step::Delete { id }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn add_ids_count_up_from_one_despite_deletes(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let rt = runtime();
        rt.block_on(async {
            let repo = InMemoryQuoteRepository::with_seed(1);
            let mut expected_next = 1_u64;
            let mut deleted = HashSet::new();

            for step in steps {
                match step {
                    Step::Add { author } => {
                        let quote = repo.add(QuoteInput::new("text", author)).await.unwrap();
                        prop_assert_eq!(quote.id.value(), expected_next);
                        prop_assert!(!deleted.contains(&quote.id.value()));
                        expected_next += 1;
                    }
                    Step::Delete { id } => {
                        let id = QuoteId::new(id).unwrap();
                        let before = repo.len();
                        match repo.delete_by_id(id).await {
                            Ok(removed) => {
                                prop_assert_eq!(removed.id, id);
                                prop_assert_eq!(repo.len(), before - 1);
                                deleted.insert(id.value());
                            }
                            Err(err) => {
                                prop_assert_eq!(err, QuoteError::NotFound { id });
                                prop_assert_eq!(repo.len(), before);
                            }
                        }
                    }
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn get_by_author_is_exact_ordered_subsequence(
        steps in prop::collection::vec(step_strategy(), 0..40),
        query in prop::sample::select(vec!["A1", "A2", "a1", "A1 ", ""]),
    ) {
        let rt = runtime();
        rt.block_on(async {
            let repo = InMemoryQuoteRepository::with_seed(2);
            for step in steps {
                match step {
                    Step::Add { author } => {
                        repo.add(QuoteInput::new("text", author)).await.unwrap();
                    }
                    Step::Delete { id } => {
                        let _ = repo.delete_by_id(QuoteId::new(id).unwrap()).await;
                    }
                }
            }

            let expected: Vec<_> = match repo.get_all().await {
                Ok(all) => all.into_iter().filter(|q| q.author == query).collect(),
                Err(_) => Vec::new(),
            };

            match repo.get_by_author(query).await {
                Ok(found) => prop_assert_eq!(found, expected),
                Err(err) => {
                    prop_assert!(expected.is_empty());
                    prop_assert_eq!(err, QuoteError::NoMatchForAuthor { author: query.to_string() });
                }
            }
            Ok(())
        })?;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_yield_distinct_ids() {
    const TASKS: usize = 16;
    const PER_TASK: usize = 25;

    let repo = Arc::new(InMemoryQuoteRepository::new());
    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for n in 0..PER_TASK {
                    repo.add(QuoteInput::new(format!("q{task}-{n}"), format!("a{task}")))
                        .await
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), TASKS * PER_TASK);

    let ids: HashSet<u64> = all.iter().map(|q| q.id.value()).collect();
    assert_eq!(ids.len(), TASKS * PER_TASK);
    assert_eq!(ids.iter().min(), Some(&1));
    assert_eq!(ids.iter().max(), Some(&((TASKS * PER_TASK) as u64)));

    let mut previous = 0;
    for quote in &all {
        assert!(quote.id.value() > previous, "insertion order follows ids");
        previous = quote.id.value();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_remove_each_quote_once() {
    let repo = Arc::new(InMemoryQuoteRepository::with_seed(3));
    for n in 0..50 {
        repo.add(QuoteInput::new(format!("q{n}"), "a")).await.unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let mut removed = 0_usize;
                for id in 1..=50 {
                    if repo.delete_by_id(QuoteId::new(id).unwrap()).await.is_ok() {
                        removed += 1;
                    }
                }
                removed
            })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap();
    }

    assert_eq!(total, 50);
    assert!(repo.is_empty());
    assert_eq!(repo.get_all().await, Err(QuoteError::EmptyCollection));
}
