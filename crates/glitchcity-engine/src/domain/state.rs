//! The game-state aggregate and its append-only log.

use serde::{Deserialize, Serialize};

use super::catalog::{Enemy, INITIAL_MISSION, INITIAL_SECONDARY_MISSION};
use super::session::SessionStatus;
use super::stalker::StalkingEnemy;
use super::stats::PlayerStats;

/// First line of a fresh session.
pub const BOOT_MESSAGE: &str = ":: [SYSTEM_BOOT] :: Welcome back to 404 City.";
/// Second line of a fresh session.
pub const HOW_TO_PLAY_MESSAGE: &str = "HOW TO PLAY: Type actions like 'look around' or 'hack the terminal' and press EXECUTE.\nType `help` for more commands.\nType `tutorial` to replay the training simulation.";

const INITIAL_HEALTH: i32 = 100;
const INITIAL_ARMOR: i32 = 100;
const INITIAL_GLITCH_LEVEL: i32 = 13;

/// Who produced a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    System,
    Player,
}

/// One line of the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique, strictly increasing in assignment order.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// The whole world as seen by the player.
///
/// Transitions never patch a state in place: they clone the previous value,
/// append to the clone's log and return it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub mission: String,
    pub secondary_mission: Option<String>,
    pub stats: PlayerStats,
    log: Vec<LogEntry>,
    pub current_enemy: Option<Enemy>,
    pub stalking_enemy: Option<StalkingEnemy>,
    pub is_tutorial_active: bool,
    pub tutorial_step: usize,
    #[serde(skip)]
    next_log_id: u64,
}

impl GameState {
    /// A brand-new session showing the boot and how-to-play lines.
    #[must_use]
    pub fn initial() -> Self {
        let mut state = Self::blank(0);
        state.push_system(BOOT_MESSAGE);
        state.push_system(HOW_TO_PLAY_MESSAGE);
        state
    }

    /// Initial values with an empty log whose ids start at `next_log_id`.
    fn blank(next_log_id: u64) -> Self {
        Self {
            mission: INITIAL_MISSION.to_owned(),
            secondary_mission: Some(INITIAL_SECONDARY_MISSION.to_owned()),
            stats: PlayerStats::new(INITIAL_HEALTH, INITIAL_ARMOR, INITIAL_GLITCH_LEVEL),
            log: Vec::new(),
            current_enemy: None,
            stalking_enemy: None,
            is_tutorial_active: false,
            tutorial_step: 0,
            next_log_id,
        }
    }

    /// Initial values with an empty log that continues this state's id
    /// sequence, so ids stay unique across a wholesale replacement.
    #[must_use]
    pub(crate) fn successor(&self) -> Self {
        Self::blank(self.next_log_id)
    }

    /// Initial values that keep this state's log.
    #[must_use]
    pub(crate) fn successor_with_log(&self) -> Self {
        let mut next = self.successor();
        next.log.clone_from(&self.log);
        next
    }

    /// The log, oldest first.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Id the next appended entry will receive.
    #[must_use]
    pub fn next_log_id(&self) -> u64 {
        self.next_log_id
    }

    /// Derived session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus::of(&self.stats)
    }

    pub(crate) fn push(&mut self, sender: Sender, text: impl Into<String>) {
        let id = self.next_log_id;
        self.next_log_id += 1;
        self.log.push(LogEntry {
            id,
            text: text.into(),
            sender,
        });
    }

    pub(crate) fn push_system(&mut self, text: impl Into<String>) {
        self.push(Sender::System, text);
    }

    /// Echoes a player action as `> {action}`.
    pub(crate) fn push_player_action(&mut self, action: &str) {
        self.push(Sender::Player, format!("> {action}"));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
