//! Match flow around the Pong physics core: the game state machine, menus
//! and their controls, player names and the match log.

pub mod controls;
pub mod error;
pub mod fsm;
pub mod local_match;
pub mod menus;
pub mod players;

pub use controls::*;
pub use error::*;
pub use fsm::*;
pub use local_match::*;
pub use menus::*;
pub use players::*;
