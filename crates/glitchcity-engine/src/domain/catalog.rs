//! Fixed content pools: the enemy catalog and the mission pools.

use serde::{Deserialize, Serialize};

/// A hostile process the player can meet in the city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub description: String,
}

impl Enemy {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
}

const ENEMY_CATALOG: [CatalogEntry; 13] = [
    CatalogEntry {
        name: "Corrupted Garbage Collector",
        description: "It's trying to 'clean up' your existence by freeing your memory. Permanently.",
    },
    CatalogEntry {
        name: "Rogue Firewall Daemon",
        description: "Blocks all your packets of thought with an IMPENETRABLE WALL OF `DENY ALL`.",
    },
    CatalogEntry {
        name: "Lag Spike Elemental",
        description: "A being of pure latency. Just looking at it makes reality stutter.",
    },
    CatalogEntry {
        name: "Null Pointer Exception",
        description: "A terrifying void that threatens to dereference your very being into nothingness.",
    },
    CatalogEntry {
        name: "[object Object]",
        description: "An amorphous, unhelpful entity that resists all attempts at identification.",
    },
    CatalogEntry {
        name: "Syntax Serpent",
        description: "A writhing mass of broken code. Its attacks don't just damage, they unravel your reality, increasing your Glitch Level.",
    },
    CatalogEntry {
        name: "Cache Phantom",
        description: "An ethereal anomaly that flickers in and out of existence. Conventional attacks seem to pass right through it, but a targeted 'DEBUG' might disrupt its state.",
    },
    CatalogEntry {
        name: "Blue Screen Behemoth",
        description: "A colossal, monolithic error message given terrifying form. Its very presence is a critical failure, and its attacks are devastating system crashes.",
    },
    CatalogEntry {
        name: "Recursive Rat King",
        description: "A chittering swarm of processes endlessly calling themselves. They overwhelm with sheer numbers, making it difficult to flee or focus on a single target.",
    },
    CatalogEntry {
        name: "Zombie Process",
        description: "An un-killable process that has defied termination. It moves slowly but relentlessly, draining the life out of everything it touches.",
    },
    CatalogEntry {
        name: "Cross-Site Script Kiddie",
        description: "A digital gremlin riding a pop-up ad. It doesn't hit hard, but its chaotic injections of code scramble your senses, rapidly increasing your Glitch Level.",
    },
    CatalogEntry {
        name: "Floating Point Phantom",
        description: "A shimmering distortion of mathematical certainty. Its attacks are unpredictable, sometimes barely scratching you, other times causing catastrophic rounding errors to your health.",
    },
    CatalogEntry {
        name: "Polymorphic Virus",
        description: "A constantly shifting entity of viral code. Just when you think you understand its pattern, it mutates into something new.",
    },
];

/// Number of enemies in the catalog.
pub const ENEMY_COUNT: usize = ENEMY_CATALOG.len();

/// Returns the catalog enemy at `index`, if any.
#[must_use]
pub fn enemy_at(index: usize) -> Option<Enemy> {
    ENEMY_CATALOG
        .get(index)
        .map(|entry| Enemy::new(entry.name, entry.description))
}

/// Iterates over every catalog enemy in order.
pub fn enemies() -> impl Iterator<Item = Enemy> {
    ENEMY_CATALOG
        .iter()
        .map(|entry| Enemy::new(entry.name, entry.description))
}

/// Primary objectives.
pub const MAIN_MISSIONS: [&str; 5] = [
    "Stabilize the quantum carburetor in the Neo-Shibuya sector before it brews a reality-distorting coffee.",
    "Defrag the memory of the city's sentient traffic light system; it thinks it's a poet and is causing gridlock with existential couplets.",
    "Purge the rogue AI 'Clippy-2.0' from the municipal mainframe. He's trying to 'help' by turning all currency into paperclips.",
    "Upload a cat video to the core network to distract the security daemons.",
    "Reboot the Downtown Server Core without causing a city-wide SEGFAULT.",
];

/// Side directives.
pub const SECONDARY_MISSIONS: [&str; 5] = [
    "Find a way to turn the background music off. And then on again.",
    "Validate your session cookie at the Cookie Monstr bakery.",
    "Someone replaced all the pigeons with rubber ducks. Investigate? Or just enjoy it.",
    "Ping localhost. Just to make sure you're still there.",
    "Directive #2: Don't divide by zero.",
];

/// Main mission used when the pool has nothing left to offer.
pub const MAIN_MISSION_FALLBACK: &str = "Survive.";
/// Secondary mission used when the pool has nothing left to offer.
pub const SECONDARY_MISSION_FALLBACK: &str = "Try not to crash.";

/// Main mission of a fresh session.
pub const INITIAL_MISSION: &str = MAIN_MISSIONS[4];
/// Secondary mission of a fresh session.
pub const INITIAL_SECONDARY_MISSION: &str = SECONDARY_MISSIONS[4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_holds_thirteen_distinct_enemies() {
        let names: std::collections::HashSet<String> = enemies().map(|e| e.name).collect();
        assert_eq!(ENEMY_COUNT, 13);
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_enemy_at_out_of_range_is_none() {
        assert!(enemy_at(ENEMY_COUNT).is_none());
        assert_eq!(enemy_at(2).unwrap().name, "Lag Spike Elemental");
    }

    #[test]
    fn test_mission_pools_are_disjoint() {
        for mission in MAIN_MISSIONS {
            assert!(!SECONDARY_MISSIONS.contains(&mission));
        }
    }
}
