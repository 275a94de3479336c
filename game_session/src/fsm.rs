//! Game State Machine
//!
//! Menu, playing, paused and postgame. The physics core is only stepped
//! while playing; pausing simply withholds frames.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    PostGame,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Reset,
    EndGame,
    GameOver,
    PlayAgain,
    MainMenu,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::warn!("rejected {:?} while in {:?}", action, from_state);
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            // From Menu
            (GameState::Menu, GameAction::Start) => Some(GameState::Playing),

            // From Playing
            (GameState::Playing, GameAction::Pause) => Some(GameState::Paused),
            (GameState::Playing, GameAction::GameOver) => Some(GameState::PostGame),

            // From Paused
            (GameState::Paused, GameAction::Resume) => Some(GameState::Playing),
            (GameState::Paused, GameAction::Reset) => Some(GameState::Playing),
            (GameState::Paused, GameAction::EndGame) => Some(GameState::PostGame),

            // From PostGame
            (GameState::PostGame, GameAction::PlayAgain) => Some(GameState::Playing),
            (GameState::PostGame, GameAction::MainMenu) => Some(GameState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if currently in the playing state
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state == GameState::Paused
    }

    /// Check if in game over state
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::PostGame
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
