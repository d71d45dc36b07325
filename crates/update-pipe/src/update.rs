//! The state + pending effects carrier

use crate::effect::{Dispatch, Effect};
use std::iter;

/// Current state plus every effect requested so far.
///
/// An update step takes an `Update` and returns a new one. Effects can only
/// be appended, so no step in a chain can drop what an earlier step asked for.
///
/// ```
/// use update_pipe::{Effects, Update};
///
/// #[derive(Debug, PartialEq)]
/// enum Action {
///     Saved,
/// }
///
/// let (count, effects) = Update::<u32, Effects<Action>>::new(0)
///     .map_state(|count| count + 1)
///     .add_message(Action::Saved)
///     .into_pair();
///
/// assert_eq!(count, 1);
/// assert_eq!(effects, Effects::message(Action::Saved));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<S, E> {
    state: S,
    effects: E,
}

impl<S, E> Update<S, E> {
    /// Resume a pipeline from a `(state, effects)` pair, e.g. the result of a
    /// nested transition function.
    pub fn from_pair((state, effects): (S, E)) -> Self {
        Self { state, effects }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// End the pipeline and hand the pair over to the runtime.
    pub fn into_pair(self) -> (S, E) {
        (self.state, self.effects)
    }

    /// Transform the state, leaving pending effects untouched.
    pub fn map_state<S2, F>(self, f: F) -> Update<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        Update {
            state: f(self.state),
            effects: self.effects,
        }
    }

    /// Apply an update step, so free functions chain like methods.
    pub fn pipe<T, F>(self, step: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        step(self)
    }
}

impl<S, E: Effect> Update<S, E> {
    /// Start a pipeline with no pending effects.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: E::none(),
        }
    }

    /// Append `effect` after everything already pending.
    pub fn add_effect(self, effect: E) -> Self {
        Self {
            state: self.state,
            effects: E::batch([self.effects, effect]),
        }
    }

    /// Append several effects, in iteration order.
    pub fn add_effects<I>(self, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            state: self.state,
            effects: E::batch(iter::once(self.effects).chain(effects)),
        }
    }

    /// Append an effect computed from the current state.
    pub fn add_effect_with<F>(self, f: F) -> Self
    where
        F: FnOnce(&S) -> E,
    {
        let effect = f(&self.state);
        self.add_effect(effect)
    }

    /// Run a nested transition on the state and append its effects.
    pub fn and_then<S2, F>(self, transition: F) -> Update<S2, E>
    where
        F: FnOnce(S) -> (S2, E),
    {
        let (state, effects) = transition(self.state);
        Update {
            state,
            effects: E::batch([self.effects, effects]),
        }
    }

    /// Re-target pending effects to another action type, e.g. when a child
    /// component's update is embedded into its parent.
    pub fn map_effects<B, F>(self, f: F) -> Update<S, E::Mapped<B>>
    where
        B: Send + 'static,
        F: Fn(E::Action) -> B + Send + Sync + 'static,
    {
        Update {
            state: self.state,
            effects: self.effects.map(f),
        }
    }
}

impl<S, E: Dispatch> Update<S, E> {
    /// Feed `action` straight back into the next update cycle.
    pub fn add_message(self, action: E::Action) -> Self {
        self.add_effect(E::message(action))
    }
}

impl<S: Default, E: Effect> Default for Update<S, E> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S, E> From<(S, E)> for Update<S, E> {
    fn from(pair: (S, E)) -> Self {
        Self::from_pair(pair)
    }
}
