use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("State not found: {type_name}")]
    StateNotFound { type_name: &'static str },
    #[error("Command not found: {type_name}")]
    CommandNotFound { type_name: &'static str },
}

impl Error {
    pub fn state_not_found<T: ?Sized>() -> Self {
        Self::StateNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn command_not_found<T: ?Sized>() -> Self {
        Self::CommandNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }
}
