use game_core::CoreError;
use thiserror::Error;

use crate::fsm::{GameAction, GameState};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot {action:?} while in {from:?}")]
    InvalidTransition { from: GameState, action: GameAction },

    #[error("both players need a name before the match can start")]
    MissingPlayerName,

    #[error(transparent)]
    Core(#[from] CoreError),
}
