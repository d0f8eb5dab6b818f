//! Task list state binding.

use super::{TaskIdStrategy, TaskListConfig};
use crate::task::{
    domain::{TaskId, TaskSnapshot},
    error::{ErrorLayer, LayeredError},
    ports::TaskStore,
    services::{
        AddTaskRequest, AddTaskUseCase, DeleteTaskUseCase, TaskIdRequest, ToggleMarkUseCase,
    },
};
use chrono::SecondsFormat;
use mockable::Clock;
use std::sync::Arc;
use uuid::Uuid;

/// Result type for presentation adapter operations.
///
/// Errors returned through this alias are always tagged
/// [`ErrorLayer::Adapter`].
pub type AdapterResult<T> = Result<T, LayeredError>;

/// Binds the task use cases to the snapshot a user interface displays.
///
/// Every mutating call runs one use case and then re-reads the store; the
/// cached [`TaskSnapshot`] therefore reflects the store as of the last
/// successful call. A failed call leaves the cached snapshot untouched.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tasklist::task::adapters::{
///     memory::InMemoryTaskStore,
///     presentation::{TaskListAdapter, TaskListConfig},
/// };
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
/// let mut adapter = TaskListAdapter::with_config(
///     Arc::new(InMemoryTaskStore::new()),
///     Arc::new(DefaultClock),
///     TaskListConfig::random_ids(),
/// );
/// let id = adapter.add_task("buy milk").await.expect("task should be added");
/// assert_eq!(adapter.tasks().get(&id).map(|task| task.title()), Some("buy milk"));
/// # })).expect("runtime should build");
/// ```
pub struct TaskListAdapter<S, C>
where
    S: TaskStore + ?Sized,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: TaskListConfig,
    add_use_case: AddTaskUseCase<S>,
    delete_use_case: DeleteTaskUseCase<S>,
    toggle_use_case: ToggleMarkUseCase<S>,
    tasks: TaskSnapshot,
}

impl<S, C> TaskListAdapter<S, C>
where
    S: TaskStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates an adapter with the default configuration.
    ///
    /// The cached snapshot starts empty; call [`Self::refresh`] to load a
    /// store that already holds tasks.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, TaskListConfig::default())
    }

    /// Creates an adapter with a custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, clock: Arc<C>, config: TaskListConfig) -> Self {
        Self {
            add_use_case: AddTaskUseCase::new(Arc::clone(&store)),
            delete_use_case: DeleteTaskUseCase::new(Arc::clone(&store)),
            toggle_use_case: ToggleMarkUseCase::new(Arc::clone(&store)),
            store,
            clock,
            config,
            tasks: TaskSnapshot::new(),
        }
    }

    /// Returns the tasks as of the last successful call.
    #[must_use]
    pub const fn tasks(&self) -> &TaskSnapshot {
        &self.tasks
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskListConfig {
        &self.config
    }

    /// Adds a task under a freshly generated identifier.
    ///
    /// Returns the generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an adapter [`LayeredError`] when the title is empty, the
    /// generated identifier is already taken, or the refresh fails.
    pub async fn add_task(&mut self, title: impl Into<String>) -> AdapterResult<TaskId> {
        let id = self.next_id();
        self.add_use_case
            .execute(AddTaskRequest::new(id.clone(), title))
            .await
            .map_err(|err| adapter_error("add_task", err))?;
        self.refresh().await?;
        Ok(id)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an adapter [`LayeredError`] when the task does not exist or
    /// the refresh fails.
    pub async fn delete_task(&mut self, id: impl Into<TaskId>) -> AdapterResult<()> {
        self.delete_use_case
            .execute(TaskIdRequest::new(id))
            .await
            .map_err(|err| adapter_error("delete_task", err))?;
        self.refresh().await
    }

    /// Toggles a task's completion mark.
    ///
    /// # Errors
    ///
    /// Returns an adapter [`LayeredError`] when the task does not exist or
    /// the refresh fails.
    pub async fn toggle_mark(&mut self, id: impl Into<TaskId>) -> AdapterResult<()> {
        self.toggle_use_case
            .execute(TaskIdRequest::new(id))
            .await
            .map_err(|err| adapter_error("toggle_mark", err))?;
        self.refresh().await
    }

    /// Re-reads every task from the store into the cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns an adapter [`LayeredError`] when the store cannot be read.
    pub async fn refresh(&mut self) -> AdapterResult<()> {
        self.tasks = self
            .store
            .get_all_tasks()
            .await
            .map_err(|err| adapter_error("refresh", err))?;
        Ok(())
    }

    fn next_id(&self) -> TaskId {
        match self.config.id_strategy {
            TaskIdStrategy::Timestamp => TaskId::new(
                self.clock
                    .utc()
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            TaskIdStrategy::Random => TaskId::new(Uuid::new_v4().to_string()),
        }
    }
}

/// Lifts a failure crossing the adapter boundary.
fn adapter_error(operation: &'static str, err: LayeredError) -> LayeredError {
    let lifted = err.lift(ErrorLayer::Adapter);
    tracing::warn!(operation, trace = %lifted.trace(), "task list operation failed");
    lifted
}
