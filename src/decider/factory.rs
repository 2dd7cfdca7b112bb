use crate::{Color, Decider, GameError};

pub struct DeciderFactory;

impl DeciderFactory {
    pub fn create<T: Decider>(color: Color, args: T::Args) -> Result<T, GameError> {
        T::new(color, args)
    }
}
