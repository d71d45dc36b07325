//! Asynchronous commands
//!
//! A [`Task`] is a batch of independent units of async work. Each unit is a
//! stream that yields zero or more actions; the host runtime polls them and
//! feeds every action into the next update cycle.

use crate::effect::{Dispatch, Effect};
use futures::future::{self, FutureExt};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A batch of asynchronous commands producing actions of type `A`.
pub struct Task<A> {
    units: Vec<BoxStream<'static, A>>,
}

impl<A: Send + 'static> Task<A> {
    /// Resolve to `action` as soon as the runtime polls the task.
    pub fn done(action: A) -> Self {
        Self {
            units: vec![stream::once(future::ready(action)).boxed()],
        }
    }

    /// Run `future` and turn its output into an action.
    pub fn perform<T, Fut, F>(future: Fut, f: F) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> A + Send + 'static,
    {
        Self {
            units: vec![future.map(f).into_stream().boxed()],
        }
    }

    /// Turn every item of `stream` into an action.
    pub fn run<T, St, F>(stream: St, f: F) -> Self
    where
        St: Stream<Item = T> + Send + 'static,
        F: FnMut(T) -> A + Send + 'static,
    {
        Self {
            units: vec![stream.map(f).boxed()],
        }
    }

    /// Merge the batch into a single stream that polls every unit concurrently.
    ///
    /// Actions of one unit keep their order; actions of different units
    /// interleave as they become ready. A unit that never ends does not hold
    /// back the others. Use [`Task::into_units`] to schedule units yourself.
    pub fn into_stream(self) -> BoxStream<'static, A> {
        stream::select_all(self.units).boxed()
    }
}

impl<A> Task<A> {
    /// Number of units in the batch
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The individual units, in the order they were batched.
    pub fn into_units(self) -> Vec<BoxStream<'static, A>> {
        self.units
    }
}

impl<A> IntoIterator for Task<A> {
    type Item = BoxStream<'static, A>;
    type IntoIter = std::vec::IntoIter<BoxStream<'static, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("units", &self.units.len())
            .finish()
    }
}

impl<A> Default for Task<A> {
    fn default() -> Self {
        Self { units: Vec::new() }
    }
}

impl<A: Send + 'static> Effect for Task<A> {
    type Action = A;
    type Mapped<B: Send + 'static> = Task<B>;

    fn none() -> Self {
        Self::default()
    }

    fn batch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let units: Vec<BoxStream<'static, A>> =
            effects.into_iter().flat_map(|task| task.units).collect();
        log::trace!("Batched {} task units", units.len());
        Self { units }
    }

    fn map<B, F>(self, f: F) -> Self::Mapped<B>
    where
        B: Send + 'static,
        F: Fn(Self::Action) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        log::trace!("Mapping {} task units to a new action type", self.units.len());
        Task {
            units: self
                .units
                .into_iter()
                .map(|unit| {
                    let f = Arc::clone(&f);
                    unit.map(move |action| (*f)(action)).boxed()
                })
                .collect(),
        }
    }

    fn is_none(&self) -> bool {
        self.units.is_empty()
    }
}

impl<A: Send + 'static> Dispatch for Task<A> {
    fn message(action: A) -> Self {
        Task::done(action)
    }
}
