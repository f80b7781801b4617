use std::any::Any;

use crate::{StateCtx, Updater};

/// Manual-only side effect.
///
/// Commands never mutate the context directly. They read what they need from
/// `ctx` and publish results through `updater`, which may be moved into a
/// callback that completes on another thread.
pub trait Command: Any {
    fn run(&self, ctx: &StateCtx, updater: Updater);
}
