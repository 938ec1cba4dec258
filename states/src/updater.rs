use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::debug;

use crate::State;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Sends new state values back to the owning `StateCtx`.
///
/// Cloneable and `Send`, so it can move into network callbacks. When the
/// context has been dropped the value is discarded.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: State + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            debug!(
                "State context dropped before update of {} arrived, discarding",
                type_name::<T>()
            );
        }
    }
}
