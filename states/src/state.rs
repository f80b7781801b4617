use std::any::Any;

/// A value stored in [`crate::StateCtx`].
///
/// Each type is stored at most once; the context looks it up by `TypeId`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
