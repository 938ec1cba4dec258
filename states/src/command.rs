use std::any::Any;

use crate::{Dep, Updater};

/// Manual-only unit of work.
///
/// Commands never run implicitly: the UI (or app setup) calls
/// `StateCtx::dispatch::<C>()`. Synchronous work mutates state through `deps`;
/// async work captures a clone of `updater` and delivers its result later.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
