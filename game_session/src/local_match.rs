use game_core::{Config, Events, FrameInput, RoundController, Score, Side};

use crate::controls::PointerEvent;
use crate::error::SessionError;
use crate::fsm::{GameAction, GameFsm, GameState, TransitionResult};
use crate::menus::{Key, MenuAction, PauseMenu, PostGameMenu, StartMenu, VisualStyle};
use crate::players::{MatchLog, MatchRecord, PlayerNames};

/// A two-player match on one machine: menus, pause handling, score and
/// match history around a single `RoundController`.
pub struct LocalMatch {
    fsm: GameFsm,
    round: RoundController,
    score: Score,
    names: Option<PlayerNames>,
    log: MatchLog,
    win_score: u8,
    pub start_menu: StartMenu,
    pub pause_menu: PauseMenu,
    pub postgame_menu: PostGameMenu,
    exit_requested: bool,
}

impl LocalMatch {
    pub fn new(config: Config, seed: u64) -> Result<Self, SessionError> {
        let width = config.playfield_width;
        let win_score = config.win_score;
        let round = RoundController::new(config, seed)?;

        Ok(Self {
            fsm: GameFsm::new(),
            round,
            score: Score::new(),
            names: None,
            log: MatchLog::new(),
            win_score,
            start_menu: StartMenu::new(width),
            pause_menu: PauseMenu::new(width),
            postgame_menu: PostGameMenu::new(width),
            exit_requested: false,
        })
    }

    fn transition(&mut self, action: GameAction) -> Result<TransitionResult, SessionError> {
        let result = self.fsm.transition(action);
        if result.success {
            Ok(result)
        } else {
            Err(SessionError::InvalidTransition {
                from: result.from_state,
                action,
            })
        }
    }

    fn reset_game(&mut self) {
        self.score.reset();
        self.round.reset_round();
    }

    fn record_match(&mut self) {
        if let Some(names) = &self.names {
            self.log.record(MatchRecord::new(names.clone(), self.score));
        }
    }

    /// Leave the start menu and begin a fresh game
    pub fn start(&mut self, names: PlayerNames) -> Result<(), SessionError> {
        if names.left.trim().is_empty() || names.right.trim().is_empty() {
            return Err(SessionError::MissingPlayerName);
        }
        self.transition(GameAction::Start)?;
        log::info!("{} vs {}", names.left, names.right);
        self.names = Some(names);
        self.reset_game();
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::Pause).map(|_| ())
    }

    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::Resume).map(|_| ())
    }

    /// Restart the current game from 0-0 without leaving the pause menu's flow
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::Reset)?;
        self.reset_game();
        Ok(())
    }

    /// Abandon the game; the partial score still goes into the log
    pub fn end_game(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::EndGame)?;
        self.record_match();
        Ok(())
    }

    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::PlayAgain)?;
        self.reset_game();
        Ok(())
    }

    pub fn main_menu(&mut self) -> Result<(), SessionError> {
        self.transition(GameAction::MainMenu)?;
        self.reset_game();
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) -> Result<(), SessionError> {
        match (self.fsm.state(), key) {
            (GameState::Menu, _) => {
                let action = self.start_menu.handle_key(key);
                self.apply(action)
            }
            (GameState::Playing, Key::Escape | Key::Space) => self.pause(),
            (GameState::Paused, Key::Escape | Key::Space) => self.resume(),
            _ => Ok(()),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<(), SessionError> {
        let action = match self.fsm.state() {
            GameState::Menu => self.start_menu.handle_pointer(event),
            GameState::Paused => self.pause_menu.handle_pointer(event),
            GameState::PostGame => self.postgame_menu.handle_pointer(event),
            GameState::Playing => MenuAction::None,
        };
        self.apply(action)
    }

    fn apply(&mut self, action: MenuAction) -> Result<(), SessionError> {
        match action {
            MenuAction::None => Ok(()),
            MenuAction::Start(names) => self.start(names),
            MenuAction::Exit => {
                self.exit_requested = true;
                Ok(())
            }
            MenuAction::Resume => self.resume(),
            MenuAction::Reset => self.reset(),
            MenuAction::EndGame => self.end_game(),
            MenuAction::PlayAgain => self.play_again(),
            MenuAction::MainMenu => self.main_menu(),
        }
    }

    /// Advance one rendered frame. Returns the frame's events, or `None`
    /// when the match is not being played.
    pub fn frame(&mut self, dt: f64, input: FrameInput) -> Result<Option<Events>, SessionError> {
        if !self.fsm.is_playing() {
            return Ok(None);
        }

        self.round
            .set_acceleration_enabled(self.pause_menu.acceleration_enabled());

        let events = match self.round.step(dt, input, self.pause_menu.multipliers()) {
            Ok(events) => events,
            Err(err) => {
                log::error!("frame failed, restarting round: {}", err);
                self.round.reset_round();
                return Ok(None);
            }
        };

        if let Some(side) = events.scored() {
            self.score.increment(side);
            log::info!("score {}-{}", self.score.left, self.score.right);

            if let Some(winner) = self.winner() {
                log::info!("{:?} wins", winner);
                self.transition(GameAction::GameOver)?;
                self.record_match();
            }
        }

        Ok(Some(events))
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.win_score)
    }

    pub fn names(&self) -> Option<&PlayerNames> {
        self.names.as_ref()
    }

    pub fn log(&self) -> &MatchLog {
        &self.log
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn style(&self) -> VisualStyle {
        self.start_menu.style()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
