//! Configuration for the presentation adapter.

/// How the adapter generates identifiers for new tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskIdStrategy {
    /// RFC 3339 UTC timestamp with millisecond precision, taken from the
    /// adapter clock.
    #[default]
    Timestamp,
    /// Random UUID v4.
    Random,
}

/// Presentation adapter settings.
///
/// # Examples
///
/// ```
/// use tasklist::task::adapters::presentation::{TaskIdStrategy, TaskListConfig};
///
/// let config = TaskListConfig::default();
/// assert_eq!(config.id_strategy, TaskIdStrategy::Timestamp);
///
/// let random = TaskListConfig::random_ids();
/// assert_eq!(random.id_strategy, TaskIdStrategy::Random);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskListConfig {
    /// Identifier generation strategy for added tasks.
    pub id_strategy: TaskIdStrategy,
}

impl TaskListConfig {
    /// Creates a configuration generating random identifiers.
    ///
    /// Timestamp identifiers collide when two tasks are added within the
    /// same millisecond; random identifiers do not.
    #[must_use]
    pub const fn random_ids() -> Self {
        Self {
            id_strategy: TaskIdStrategy::Random,
        }
    }

    /// Sets the identifier generation strategy.
    #[must_use]
    pub const fn with_id_strategy(mut self, id_strategy: TaskIdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }
}
