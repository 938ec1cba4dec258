use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::updater::Update;
use crate::{Command, Dep, Error, State, Updater};

/// Owns every registered state and command of the app.
///
/// States are keyed by type, so each type is registered at most once.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    send: Sender<Update>,
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
            send,
            recv,
        }
    }

    /// Register `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state_mut"))
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutate a registered state in place.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn try_dispatch<C: Command>(&mut self) -> Result<(), Error> {
        let command = self.commands.get(&TypeId::of::<C>()).ok_or_else(|| {
            Error::command_not_found(type_name::<C>(), "StateCtx::try_dispatch")
        })?;
        debug!("Dispatching {}", type_name::<C>());
        command.run(Dep::new(&mut self.states), Updater::new(self.send.clone()));
        Ok(())
    }

    /// # Panics
    /// Panics if `C` was never recorded with [`StateCtx::record_command`].
    pub fn dispatch<C: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<C>() {
            panic!("{err}");
        }
    }

    /// Apply every value delivered through an `Updater` since the last call.
    ///
    /// Returns the number of values applied. Call once per frame.
    pub fn sync_states(&mut self) -> usize {
        let mut applied = 0;
        for (id, value) in self.recv.try_iter() {
            match self.states.get_mut(&id) {
                Some(state) => {
                    state.assign_box(value);
                    applied += 1;
                }
                None => warn!("Dropped update for unregistered state {id:?}"),
            }
        }
        applied
    }
}
