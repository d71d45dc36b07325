//! Effect capability
//!
//! The carrier does not know what an effect is. It only needs an empty value,
//! a way to batch descriptions together, and a way to re-target the actions
//! they eventually produce. Any host runtime can plug in its own description
//! type by implementing [`Effect`].

/// A composable, batchable description of zero or more side-effect requests.
///
/// Implementations must uphold:
/// - `batch` is associative and `none()` is its identity
/// - `batch` keeps the order of its inputs
/// - `map(|a| a)` leaves the description unchanged, and mapping twice equals
///   mapping once with the composed function
///
/// The action type of a description may be anything its implementation
/// accepts; [`crate::Effects`] takes non-`Send` actions. Only the *target* of
/// [`Effect::map`] must be `Send + 'static`, so that async implementations
/// can move mapped actions across threads.
pub trait Effect: Sized {
    /// The action type delivered back to the update loop.
    type Action;

    /// The same description re-targeted to actions of type `B`.
    type Mapped<B: Send + 'static>: Effect<Action = B>;

    /// The empty description.
    fn none() -> Self;

    /// Combine descriptions, earlier items first.
    fn batch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Self>;

    /// Rewrite every action this description will produce.
    fn map<B, F>(self, f: F) -> Self::Mapped<B>
    where
        B: Send + 'static,
        F: Fn(Self::Action) -> B + Send + Sync + 'static;

    /// Whether the description requests nothing at all.
    fn is_none(&self) -> bool;
}

/// Effect types that can feed an action straight back into the next cycle.
pub trait Dispatch: Effect {
    /// A description that resolves immediately to `action`.
    fn message(action: Self::Action) -> Self;
}
