use flume::Sender;
use log::warn;

use crate::{State, StateCtx};

pub(crate) type Update = Box<dyn FnOnce(&mut StateCtx) + Send>;

/// Queues mutations for [`StateCtx::sync`].
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("queued", &self.send.len())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replace the stored value of `T` with `state`.
    pub fn set<T: State + Send>(&self, state: T) {
        self.apply(move |ctx| ctx.add_state(state));
    }

    /// Queue an arbitrary mutation of the context.
    pub fn apply(&self, update: impl FnOnce(&mut StateCtx) + Send + 'static) {
        if self.send.send(Box::new(update)).is_err() {
            // The context was dropped; nobody is left to observe the update.
            warn!("Updater: state context is gone, dropping update");
        }
    }
}
