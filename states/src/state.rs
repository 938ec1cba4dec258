use std::any::{Any, type_name};

use log::warn;

/// A value stored in `StateCtx`, looked up by its concrete type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value delivered through an `Updater`.
    ///
    /// Most implementations forward to [`state_assign_impl`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Downcast `new_self` to `T` and overwrite `target` with it.
///
/// A value of the wrong type is dropped and logged.
pub fn state_assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Ignored update with mismatched type for {}", type_name::<T>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Counter(u32);

    #[test]
    fn assign_replaces_value_of_same_type() {
        let mut counter = Counter(1);
        state_assign_impl(&mut counter, Box::new(Counter(7)));
        assert_eq!(counter, Counter(7));
    }

    #[test]
    fn assign_ignores_value_of_other_type() {
        let mut counter = Counter(1);
        state_assign_impl(&mut counter, Box::new("not a counter"));
        assert_eq!(counter, Counter(1));
    }
}
