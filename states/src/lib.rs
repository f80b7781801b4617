//! Application state container for the roster UI.
//!
//! - `State`: any value stored in a [`StateCtx`], addressed by its type.
//! - `Command`: a manual-only side effect (network IO). Commands read the
//!   context and report back through an [`Updater`].
//! - `Updater`: a cloneable, `Send` handle that queues mutations from any
//!   thread. [`StateCtx::sync`] applies them on the UI thread, one closure at
//!   a time, so readers never observe a half-applied update.

mod command;
mod ctx;
mod error;
mod state;
mod updater;

pub use command::Command;
pub use ctx::StateCtx;
pub use error::Error;
pub use state::State;
pub use updater::Updater;
