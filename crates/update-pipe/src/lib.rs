//! # update-pipe
//!
//! A carrier for "state so far, effects so far" that lets small, pure update
//! steps be chained without destructuring and re-merging a `(state, effects)`
//! pair after every step.
//!
//! ## Effect capability
//!
//! The carrier is generic over the effect description. Anything implementing
//! [`Effect`] (empty value, order-preserving batch, map over the action type)
//! can be threaded through an [`Update`]. Two descriptions ship with the crate:
//!
//! - [`Effects`]: declarative values (messages, delayed messages, named requests)
//! - [`Task`]: asynchronous commands backed by streams (feature `task`)
//!
//! Executing effects is the host runtime's job; this crate only describes them.
//!
//! ## Usage
//!
//! ```rust
//! use update_pipe::{Effects, Request, Update};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Action {
//!     Saved,
//! }
//!
//! fn update(counter: Counter) -> Result<(Counter, Effects<Action>), update_pipe::EffectError> {
//!     let save = Request::new("save", counter.count + 1, |_| Some(Action::Saved))?;
//!     Ok(Update::new(counter)
//!         .map_state(|c| Counter { count: c.count + 1 })
//!         .add_effect(Effects::request(save))
//!         .into_pair())
//! }
//!
//! let (counter, effects) = update(Counter::default())?;
//! assert_eq!(counter.count, 1);
//! assert_eq!(effects.len(), 1);
//! # Ok::<(), update_pipe::EffectError>(())
//! ```

mod effect;
mod effects;
mod error;
#[cfg(feature = "task")]
mod task;
mod update;

pub use effect::{Dispatch, Effect};
pub use effects::{EffectItem, Effects, Request};
pub use error::EffectError;
#[cfg(feature = "task")]
pub use task::Task;
pub use update::Update;
