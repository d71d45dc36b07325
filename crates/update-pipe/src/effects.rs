//! Declarative effects
//!
//! Effects as plain values: the update loop describes what it wants done and
//! the host runtime decides how. Every item eventually yields at most one
//! action that is fed back into the next cycle.

use crate::effect::{Dispatch, Effect};
use crate::error::EffectError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

type Handler<A> = Arc<dyn Fn(Value) -> Option<A> + Send + Sync>;

/// A named request interpreted by the host runtime.
///
/// The runtime looks at `name` and `payload`, performs the work, and hands
/// the JSON response to [`Request::respond`] to obtain the follow-up action.
pub struct Request<A> {
    name: String,
    payload: Value,
    handler: Handler<A>,
}

impl<A: 'static> Request<A> {
    /// Create a request whose raw JSON response is turned into an action by `handler`.
    pub fn new<P, F>(name: impl Into<String>, payload: P, handler: F) -> Result<Self, EffectError>
    where
        P: Serialize,
        F: Fn(Value) -> Option<A> + Send + Sync + 'static,
    {
        let name = name.into();
        let payload = serde_json::to_value(payload).map_err(|source| EffectError::Encode {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            payload,
            handler: Arc::new(handler),
        })
    }

    /// Fire-and-forget request; the response never produces an action.
    pub fn notify<P>(name: impl Into<String>, payload: P) -> Result<Self, EffectError>
    where
        P: Serialize,
    {
        Self::new(name, payload, |_| None)
    }

    /// Create a request whose response is decoded into `T` before reaching `handler`.
    ///
    /// A response that does not match `T` reaches the handler as
    /// [`EffectError::Decode`], so the update loop can react to it like any
    /// other outcome.
    pub fn decoded<P, T, F>(
        name: impl Into<String>,
        payload: P,
        handler: F,
    ) -> Result<Self, EffectError>
    where
        P: Serialize,
        T: DeserializeOwned + 'static,
        F: Fn(Result<T, EffectError>) -> Option<A> + Send + Sync + 'static,
    {
        let name = name.into();
        let request_name = name.clone();

        Self::new(name, payload, move |response| {
            let decoded = serde_json::from_value::<T>(response).map_err(|source| {
                log::warn!(
                    "Response for request '{}' did not decode: {}",
                    request_name,
                    source
                );
                EffectError::Decode {
                    name: request_name.clone(),
                    source,
                }
            });
            handler(decoded)
        })
    }

    fn map_with<B, F>(self, f: Arc<F>) -> Request<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let handler = self.handler;
        Request {
            name: self.name,
            payload: self.payload,
            handler: Arc::new(move |response| (*handler)(response).map(|action| (*f)(action))),
        }
    }
}

impl<A> Request<A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Turn the runtime's response into the follow-up action, if any.
    pub fn respond(&self, response: Value) -> Option<A> {
        (*self.handler)(response)
    }
}

impl<A> Clone for Request<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            payload: self.payload.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<A> fmt::Debug for Request<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// Requests are equal when they ask for the same thing; handlers are not compared.
impl<A> PartialEq for Request<A> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.payload == other.payload
    }
}

/// A single effect description.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectItem<A> {
    /// Deliver the action on the next cycle, without delay
    Message(A),
    /// Deliver the action once `delay` has passed
    Delayed { delay: Duration, action: A },
    /// Ask the runtime to do something and map its response to an action
    Request(Request<A>),
}

impl<A: 'static> EffectItem<A> {
    fn map_with<B, F>(self, f: &Arc<F>) -> EffectItem<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self {
            EffectItem::Message(action) => EffectItem::Message((**f)(action)),
            EffectItem::Delayed { delay, action } => EffectItem::Delayed {
                delay,
                action: (**f)(action),
            },
            EffectItem::Request(request) => EffectItem::Request(request.map_with(Arc::clone(f))),
        }
    }
}

/// An ordered batch of [`EffectItem`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Effects<A> {
    items: Vec<EffectItem<A>>,
}

impl<A> Effects<A> {
    /// Deliver `action` on the next cycle.
    pub fn message(action: A) -> Self {
        Self {
            items: vec![EffectItem::Message(action)],
        }
    }

    /// Deliver `action` after `delay`.
    pub fn delayed(delay: Duration, action: A) -> Self {
        Self {
            items: vec![EffectItem::Delayed { delay, action }],
        }
    }

    pub fn request(request: Request<A>) -> Self {
        Self {
            items: vec![EffectItem::Request(request)],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, EffectItem<A>> {
        self.items.iter()
    }
}

impl<A> Default for Effects<A> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<A> IntoIterator for Effects<A> {
    type Item = EffectItem<A>;
    type IntoIter = std::vec::IntoIter<EffectItem<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Effects<A> {
    type Item = &'a EffectItem<A>;
    type IntoIter = std::slice::Iter<'a, EffectItem<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<A: 'static> Effect for Effects<A> {
    type Action = A;
    type Mapped<B: Send + 'static> = Effects<B>;

    fn none() -> Self {
        Self::default()
    }

    fn batch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let items: Vec<EffectItem<A>> = effects.into_iter().flat_map(|e| e.items).collect();
        log::trace!("Batched {} effect items", items.len());
        Self { items }
    }

    fn map<B, F>(self, f: F) -> Self::Mapped<B>
    where
        B: Send + 'static,
        F: Fn(Self::Action) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        log::trace!("Mapping {} effect items to a new action type", self.items.len());
        Effects {
            items: self
                .items
                .into_iter()
                .map(|item| item.map_with(&f))
                .collect(),
        }
    }

    fn is_none(&self) -> bool {
        self.items.is_empty()
    }
}

impl<A: 'static> Dispatch for Effects<A> {
    fn message(action: A) -> Self {
        Self {
            items: vec![EffectItem::Message(action)],
        }
    }
}
