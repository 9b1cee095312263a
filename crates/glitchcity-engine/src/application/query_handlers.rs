//! Query handlers for the game session.
//!
//! Views are computed from the live state and never stored.

use serde::Serialize;

use crate::domain::ambience::{AmbienceIntent, ambience_for};
use crate::domain::session::SessionStatus;
use crate::domain::state::GameState;
use crate::domain::tutorial::placeholder_for;

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// The full game state, log included.
    pub state: GameState,
    /// Whether the session accepts actions.
    pub status: SessionStatus,
    /// Soundscape to play.
    pub ambience: AmbienceIntent,
    /// Input hint for the current tutorial step.
    pub tutorial_placeholder: Option<&'static str>,
    /// Whether the combat action panel should be shown.
    pub in_encounter: bool,
}

/// Builds the view of `state`.
#[must_use]
pub fn get_game_view(state: &GameState) -> GameView {
    let tutorial_placeholder = if state.is_tutorial_active {
        placeholder_for(state.tutorial_step)
    } else {
        None
    };
    GameView {
        state: state.clone(),
        status: state.status(),
        ambience: ambience_for(state),
        tutorial_placeholder,
        in_encounter: state.current_enemy.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Enemy;
    use crate::domain::stats::PlayerStats;
    use crate::domain::tutorial::start_tutorial;

    #[test]
    fn test_view_of_live_session() {
        let state = GameState::initial();

        let view = get_game_view(&state);

        assert_eq!(view.status, SessionStatus::Active);
        assert_eq!(view.ambience, AmbienceIntent::Normal);
        assert!(view.tutorial_placeholder.is_none());
        assert!(!view.in_encounter);
    }

    #[test]
    fn test_view_during_tutorial_carries_placeholder() {
        let state = start_tutorial(&GameState::initial());

        let view = get_game_view(&state);

        assert_eq!(view.tutorial_placeholder, Some("Type 'continue'..."));
    }

    #[test]
    fn test_view_during_combat() {
        let mut state = GameState::initial();
        state.current_enemy = Some(Enemy::new("Rogue Firewall Daemon", "DENY ALL."));

        let view = get_game_view(&state);

        assert!(view.in_encounter);
        assert_eq!(view.ambience, AmbienceIntent::Combat);
    }

    #[test]
    fn test_view_serializes_status_in_lowercase() {
        let mut state = GameState::initial();
        state.stats = PlayerStats::new(0, 0, 0);

        let json = serde_json::to_value(get_game_view(&state)).unwrap();

        assert_eq!(json["status"], "over");
        assert_eq!(json["ambience"], "silent");
        assert_eq!(json["state"]["stats"]["health"], 0);
        assert_eq!(json["inEncounter"], false);
    }
}
