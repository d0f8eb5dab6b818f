//! Presentation adapter integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklist::task::{
    adapters::{
        memory::InMemoryTaskStore,
        presentation::{TaskListAdapter, TaskListConfig},
    },
    error::ErrorLayer,
};

type TestAdapter = TaskListAdapter<InMemoryTaskStore, DefaultClock>;

#[fixture]
fn adapter() -> TestAdapter {
    TaskListAdapter::with_config(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(DefaultClock),
        TaskListConfig::random_ids(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn visible_tasks_follow_every_mutation(mut adapter: TestAdapter) {
    let milk = adapter.add_task("buy milk").await.expect("add should succeed");
    let dog = adapter.add_task("walk dog").await.expect("add should succeed");
    adapter
        .toggle_mark(milk.clone())
        .await
        .expect("toggle should succeed");
    adapter
        .delete_task(dog)
        .await
        .expect("delete should succeed");

    let titles: Vec<(&str, bool)> = adapter
        .tasks()
        .iter()
        .map(|task| (task.title(), task.is_completed()))
        .collect();
    assert_eq!(titles, vec![("buy milk", true)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_failure_is_an_adapter_error(mut adapter: TestAdapter) {
    let failures = vec![
        adapter.add_task("").await.err(),
        adapter.delete_task("missing").await.err(),
        adapter.toggle_mark("missing").await.err(),
    ];

    for failure in failures {
        let err = failure.expect("operation should fail");
        assert_eq!(err.layer(), ErrorLayer::Adapter);
        assert!(err.reason().is_some(), "origin reason should be reachable");
        assert!(err.trace().starts_with("AdapterError => UseCaseError => StoreError"));
    }
}
