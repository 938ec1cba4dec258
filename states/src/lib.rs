//! Typed state container used by the roster app.
//!
//! - `State`: any value stored in a [`StateCtx`], keyed by its type.
//! - `Command`: a manual-only unit of work dispatched by type.
//! - `Updater`: a cloneable, `Send` handle that async work (network callbacks)
//!   uses to hand a new value back to the context. Values are applied on the
//!   UI thread by [`StateCtx::sync_states`].

mod command;
mod ctx;
mod dep;
mod error;
mod state;
mod updater;

pub use command::Command;
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use state::{State, state_assign_impl};
pub use updater::Updater;
