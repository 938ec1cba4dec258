use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Borrowed view of the registered states, handed to a running `Command`.
pub struct Dep<'a> {
    states: &'a mut BTreeMap<TypeId, Box<dyn State>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a mut BTreeMap<TypeId, Box<dyn State>>) -> Self {
        Self { states }
    }

    pub fn try_state_ref<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::try_state_ref"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::try_state_mut"))
    }

    /// # Panics
    /// Panics if `T` was never registered with `StateCtx::add_state`.
    pub fn get_state_ref<T: State>(&self) -> &T {
        self.try_state_ref::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered with `StateCtx::add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }
}
