//! Layered error taxonomy for the task list pipeline.
//!
//! Every failure travels upward as a [`LayeredError`] tagged with the
//! [`ErrorLayer`] that last handled it. Crossing a boundary lifts the error
//! into the next layer with [`LayeredError::lift`], which keeps the previous
//! error as its cause so the full chain down to the origin stays available.

use super::{domain::TaskDomainError, ports::TaskStoreFailure};
use std::{error::Error as StdError, fmt, sync::Arc};
use thiserror::Error;

/// Architectural layer that raised or forwarded an error.
///
/// Layers are ordered from the innermost (`Entity`) to the outermost
/// (`Adapter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorLayer {
    /// Task entity invariants.
    Entity,
    /// Task store operations.
    Store,
    /// Use case orchestration.
    UseCase,
    /// Presentation adapter boundary.
    Adapter,
}

impl ErrorLayer {
    /// Returns the layer immediately below this one.
    #[must_use]
    pub const fn below(self) -> Option<Self> {
        match self {
            Self::Entity => None,
            Self::Store => Some(Self::Entity),
            Self::UseCase => Some(Self::Store),
            Self::Adapter => Some(Self::UseCase),
        }
    }

    /// Returns the error kind name used when rendering traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "EntityError",
            Self::Store => "StoreError",
            Self::UseCase => "UseCaseError",
            Self::Adapter => "AdapterError",
        }
    }
}

impl fmt::Display for ErrorLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason recorded by the layer that first detected a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FailureReason {
    /// Entity invariant violation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Store-level rejection.
    #[error(transparent)]
    Store(#[from] TaskStoreFailure),
}

#[derive(Debug, Clone)]
enum Cause {
    Layered(Box<LayeredError>),
    Foreign(Arc<dyn StdError + Send + Sync>),
}

/// Error value shared by every layer of the task list.
///
/// An error is either an *origin* (it carries a [`FailureReason`] or a bare
/// message) or a *wrapper* around a cause. [`LayeredError::lift`] always
/// wraps and dispatches on the layer tag:
///
/// - an error from the layer immediately below is wrapped with an empty
///   message, so its own message shows through;
/// - anything else, including an error already tagged with the target
///   layer, is wrapped with the cause's message copied into the new error.
///
/// Only the store boundary may keep an error as-is: [`LayeredError::ensure_layer`]
/// returns store errors unchanged and lifts everything else.
///
/// # Examples
///
/// ```
/// use tasklist::task::{
///     domain::TaskDomainError,
///     error::{ErrorLayer, LayeredError},
/// };
///
/// let entity = LayeredError::from(TaskDomainError::EmptyTitle);
/// let store = entity.lift(ErrorLayer::Store);
///
/// assert_eq!(store.layer(), ErrorLayer::Store);
/// assert_eq!(store.message(), "");
/// assert_eq!(store.to_string(), "task must have an id and a title");
/// assert_eq!(
///     store.trace(),
///     "StoreError => EntityError: task must have an id and a title"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LayeredError {
    layer: ErrorLayer,
    message: String,
    reason: Option<FailureReason>,
    cause: Option<Cause>,
}

impl LayeredError {
    /// Creates an origin error with a free-form message and no cause.
    #[must_use]
    pub fn new(layer: ErrorLayer, message: impl Into<String>) -> Self {
        Self {
            layer,
            message: message.into(),
            reason: None,
            cause: None,
        }
    }

    /// Creates an origin error from a typed failure reason.
    #[must_use]
    pub fn from_reason(layer: ErrorLayer, reason: impl Into<FailureReason>) -> Self {
        let failure = reason.into();
        Self {
            layer,
            message: failure.to_string(),
            reason: Some(failure),
            cause: None,
        }
    }

    /// Wraps an error from outside the taxonomy at the given layer.
    ///
    /// The foreign error's message is carried as this error's message and
    /// the foreign error itself is kept as the cause.
    #[must_use]
    pub fn foreign(layer: ErrorLayer, err: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            layer,
            message: err.to_string(),
            reason: None,
            cause: Some(Cause::Foreign(Arc::new(err))),
        }
    }

    /// Wraps this error in a new error tagged with `target`.
    ///
    /// The cause is always kept, even when it already carries `target`, so
    /// one boundary crossing adds exactly one link to the chain.
    #[must_use]
    pub fn lift(self, target: ErrorLayer) -> Self {
        let message = if target.below() == Some(self.layer) {
            String::new()
        } else {
            self.to_string()
        };
        Self {
            layer: target,
            message,
            reason: None,
            cause: Some(Cause::Layered(Box::new(self))),
        }
    }

    /// Returns this error unchanged when it is already tagged with `layer`,
    /// otherwise lifts it.
    ///
    /// Used where a port may hand back errors of its own layer, such as a
    /// store implementation returning store errors.
    #[must_use]
    pub fn ensure_layer(self, layer: ErrorLayer) -> Self {
        if self.layer == layer {
            self
        } else {
            self.lift(layer)
        }
    }

    /// Returns the layer this error belongs to.
    #[must_use]
    pub const fn layer(&self) -> ErrorLayer {
        self.layer
    }

    /// Returns this error's own message, which is empty for plain wrappers.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the origin reason found anywhere in the chain.
    #[must_use]
    pub fn reason(&self) -> Option<&FailureReason> {
        self.chain().find_map(|err| err.reason.as_ref())
    }

    /// Returns the wrapped taxonomy error, if the cause is one.
    #[must_use]
    pub fn layered_cause(&self) -> Option<&Self> {
        match self.cause.as_ref() {
            Some(Cause::Layered(inner)) => Some(inner.as_ref()),
            Some(Cause::Foreign(_)) | None => None,
        }
    }

    /// Iterates the taxonomy errors from this one down to the origin.
    #[must_use]
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns the innermost error of the chain.
    ///
    /// A foreign cause is returned when the chain ends in one; otherwise the
    /// deepest taxonomy error is returned.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let innermost = self.chain().last().unwrap_or(self);
        match innermost.cause.as_ref() {
            Some(Cause::Foreign(foreign)) => foreign.as_ref() as &(dyn StdError + 'static),
            Some(Cause::Layered(_)) | None => innermost as &(dyn StdError + 'static),
        }
    }

    /// Renders the chain as `Outer => Inner: origin message`.
    #[must_use]
    pub fn trace(&self) -> String {
        let layers: Vec<&str> = self.chain().map(|err| err.layer.as_str()).collect();
        format!("{}: {}", layers.join(" => "), self.root_cause())
    }
}

impl fmt::Display for LayeredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            return f.write_str(&self.message);
        }
        match self.cause.as_ref() {
            Some(Cause::Layered(inner)) => write!(f, "{inner}"),
            Some(Cause::Foreign(foreign)) => write!(f, "{foreign}"),
            None => f.write_str(self.layer.as_str()),
        }
    }
}

impl StdError for LayeredError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause.as_ref() {
            Some(Cause::Layered(inner)) => Some(inner.as_ref() as &(dyn StdError + 'static)),
            Some(Cause::Foreign(foreign)) => Some(foreign.as_ref() as &(dyn StdError + 'static)),
            None => None,
        }
    }
}

impl From<TaskDomainError> for LayeredError {
    fn from(err: TaskDomainError) -> Self {
        Self::from_reason(ErrorLayer::Entity, err)
    }
}

impl From<TaskStoreFailure> for LayeredError {
    fn from(err: TaskStoreFailure) -> Self {
        Self::from_reason(ErrorLayer::Store, err)
    }
}

/// Iterator over a [`LayeredError`] chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a LayeredError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a LayeredError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.layered_cause();
        Some(current)
    }
}
