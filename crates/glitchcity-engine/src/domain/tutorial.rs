//! Scripted onboarding sequence.
//!
//! The tutorial is a fixed table of steps. Each step expects a literal input
//! (or one of a few); matching input advances, anything else is rejected
//! without touching the step index or stats. Step 4 simulates a fight by
//! parking a placeholder enemy in the state; the encounter engine is never
//! involved.

use super::catalog::Enemy;
use super::state::GameState;

/// Shown when the input does not match the current step.
pub const REJECTION_MESSAGE: &str =
    ":: Invalid command for tutorial sequence. Please follow the instructions. ::";
/// Appended when the tutorial hands over to the live game.
pub const TUTORIAL_COMPLETE_MESSAGE: &str =
    ":: TUTORIAL_COMPLETE ::\nLive system connection established. Welcome to 404 City.";

/// Index of the simulated combat step.
pub const COMBAT_SIMULATION_STEP: usize = 4;

/// Input a tutorial step waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedInput {
    Exact(&'static str),
    AnyOf(&'static [&'static str]),
}

impl ExpectedInput {
    /// Case-insensitive match against the trimmed input.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.trim();
        match self {
            Self::Exact(expected) => input.eq_ignore_ascii_case(expected),
            Self::AnyOf(options) => options.iter().any(|o| input.eq_ignore_ascii_case(o)),
        }
    }
}

/// One entry of the tutorial script.
#[derive(Debug, Clone, Copy)]
pub struct TutorialStep {
    pub text: &'static str,
    pub expected: ExpectedInput,
    pub placeholder: &'static str,
}

pub const TUTORIAL_STEPS: [TutorialStep; 6] = [
    TutorialStep {
        text: ":: TUTORIAL_INITIATED ::\nWelcome to 404 City, user. This simulation will prepare you for the chaos. This is the **Game Log**, where all events are recorded. Your commands and system responses will appear here.\n\nType `continue` to proceed.",
        expected: ExpectedInput::Exact("continue"),
        placeholder: "Type 'continue'...",
    },
    TutorialStep {
        text: "Good. Below is the **Action Panel**. This is your primary interface with the city. You type commands here and press EXECUTE. Try typing `look around` now.",
        expected: ExpectedInput::Exact("look around"),
        placeholder: "Type 'look around'...",
    },
    TutorialStep {
        text: "Excellent. You see a flickering neon sign for a ramen shop. Look to the top-left. Those are your **Status Bars**: HEALTH, ARMOR, and GLITCH LEVEL. Keep an eye on them. Glitch is... unpredictable.\n\nType `got it`.",
        expected: ExpectedInput::Exact("got it"),
        placeholder: "Type 'got it'...",
    },
    TutorialStep {
        text: "Now look to the top-right. These are your **Objectives**. The yellow one is your main mission. The purple one is a secondary directive. Completing them is... advised.\n\nType `understood`.",
        expected: ExpectedInput::Exact("understood"),
        placeholder: "Type 'understood'...",
    },
    TutorialStep {
        text: ":: SIMULATION ::\nA `Lag Spike Elemental` materializes in front of you! In combat, your action panel changes. You have three options: ATTACK, DEBUG, or FLEE. For this simulation, choose any action.",
        expected: ExpectedInput::AnyOf(&["attack", "debug", "flee"]),
        placeholder: "Choose a combat action...",
    },
    TutorialStep {
        text: "You chose wisely. The simulation is complete. Remember, real encounters are not so forgiving. The system is now yours to navigate. Good luck.\n\nType `start game` to enter 404 City.",
        expected: ExpectedInput::Exact("start game"),
        placeholder: "Type 'start game'...",
    },
];

/// The stand-in enemy shown during the combat simulation.
#[must_use]
pub fn simulated_enemy() -> Enemy {
    Enemy::new("Lag Spike Elemental", "A being of pure latency.")
}

/// Input hint for `step`, if it exists.
#[must_use]
pub fn placeholder_for(step: usize) -> Option<&'static str> {
    TUTORIAL_STEPS.get(step).map(|s| s.placeholder)
}

/// Result of feeding one input to the tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorialOutcome {
    /// Input did not match; only the log changed.
    Rejected(GameState),
    /// Moved to the next step.
    Advanced(GameState),
    /// The final step was passed; the live game starts from this state.
    Completed(GameState),
}

impl TutorialOutcome {
    #[must_use]
    pub fn into_state(self) -> GameState {
        match self {
            Self::Rejected(state) | Self::Advanced(state) | Self::Completed(state) => state,
        }
    }
}

/// Starts (or restarts) the tutorial on a fresh state.
#[must_use]
pub fn start_tutorial(prev: &GameState) -> GameState {
    let mut next = prev.successor();
    next.is_tutorial_active = true;
    next.tutorial_step = 0;
    next.push_system(TUTORIAL_STEPS[0].text);
    next
}

/// Ends the tutorial, keeping its log and handing over a fresh live state.
#[must_use]
pub fn finish_tutorial(prev: &GameState) -> GameState {
    let mut next = prev.successor_with_log();
    next.push_system(TUTORIAL_COMPLETE_MESSAGE);
    next
}

/// Feeds `input` to the current tutorial step.
#[must_use]
pub fn advance_tutorial(prev: &GameState, input: &str) -> TutorialOutcome {
    let step = prev.tutorial_step;
    let Some(current) = TUTORIAL_STEPS.get(step) else {
        return TutorialOutcome::Completed(finish_tutorial(prev));
    };

    let mut next = prev.clone();
    next.push_player_action(input);

    if !current.expected.accepts(input) {
        next.push_system(REJECTION_MESSAGE);
        return TutorialOutcome::Rejected(next);
    }

    let next_step = step + 1;
    let Some(upcoming) = TUTORIAL_STEPS.get(next_step) else {
        return TutorialOutcome::Completed(finish_tutorial(prev));
    };

    if step == COMBAT_SIMULATION_STEP {
        next.push_system(format!(
            "You chose {}. The simulated entity dissolves into static.",
            input.trim().to_uppercase()
        ));
    }
    next.push_system(upcoming.text);
    next.tutorial_step = next_step;
    next.current_enemy = (next_step == COMBAT_SIMULATION_STEP).then(simulated_enemy);

    TutorialOutcome::Advanced(next)
}
