use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use flume::Receiver;
use log::{debug, error};

use crate::updater::Update;
use crate::{Command, Error, State, Updater};

/// Owns every registered state and command.
///
/// UI code reads with [`StateCtx::state`], mutates with
/// [`StateCtx::state_mut`] / [`StateCtx::update`], and triggers side effects
/// with [`StateCtx::dispatch`] or [`StateCtx::enqueue_command`].
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    // Commands queued during a frame, run by `flush_commands`.
    queued_commands: Vec<TypeId>,

    updater: Updater,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .field("queued_commands", &self.queued_commands.len())
            .field("pending_updates", &self.recv.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            commands: BTreeMap::new(),
            queued_commands: Vec::new(),
            updater: Updater::new(send),
            recv,
        }
    }

    /// Register `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutate `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> Result<(), Error> {
        let state = self.try_state_mut::<T>()?;
        f(state);
        Ok(())
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Run `C` immediately.
    pub fn dispatch<C: Command>(&self) -> Result<(), Error> {
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .ok_or_else(Error::command_not_found::<C>)?;

        debug!("StateCtx: dispatching {}", type_name::<C>());
        command.run(self, self.updater.clone());
        Ok(())
    }

    /// Queue `C` to run at the next [`StateCtx::flush_commands`].
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queued_commands.push(TypeId::of::<C>());
    }

    /// Run every queued command in enqueue order.
    pub fn flush_commands(&mut self) {
        for id in std::mem::take(&mut self.queued_commands) {
            match self.commands.get(&id) {
                Some(command) => command.run(self, self.updater.clone()),
                None => error!("StateCtx: queued command {id:?} was never recorded"),
            }
        }
    }

    /// A handle for publishing updates from outside the UI thread.
    pub fn updater(&self) -> Updater {
        self.updater.clone()
    }

    /// Apply every update queued so far. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let updates: Vec<Update> = self.recv.try_iter().collect();
        let applied = updates.len();

        for update in updates {
            update(self);
        }

        applied
    }
}
