//! Teaching Rewards
//!
//! Completing a timed session earns coins and experience. Coins unlock
//! titles; experience determines the teaching level.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Experience needed per teaching level.
pub const XP_PER_LEVEL: u64 = 100;

/// What a completed session pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionReward {
    pub coins: u64,
    pub experience: u64,
}

/// A selectable teaching session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionLength {
    pub minutes: u32,
    pub label: &'static str,
    pub tier: &'static str,
    pub reward: SessionReward,
}

impl SessionLength {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.minutes) * 60)
    }

    /// Finds the option for an exact number of minutes.
    pub fn for_minutes(minutes: u32) -> Option<&'static SessionLength> {
        SESSION_LENGTHS.iter().find(|len| len.minutes == minutes)
    }
}

pub static SESSION_LENGTHS: &[SessionLength] = &[
    SessionLength {
        minutes: 15,
        label: "15 minutes",
        tier: "Quick",
        reward: SessionReward { coins: 10, experience: 25 },
    },
    SessionLength {
        minutes: 30,
        label: "30 minutes",
        tier: "Standard",
        reward: SessionReward { coins: 25, experience: 50 },
    },
    SessionLength {
        minutes: 45,
        label: "45 minutes",
        tier: "Extended",
        reward: SessionReward { coins: 40, experience: 75 },
    },
    SessionLength {
        minutes: 60,
        label: "1 hour",
        tier: "Full Session",
        reward: SessionReward { coins: 60, experience: 100 },
    },
    SessionLength {
        minutes: 90,
        label: "1.5 hours",
        tier: "Master Class",
        reward: SessionReward { coins: 100, experience: 150 },
    },
];

/// A title unlocked by accumulating coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Title {
    pub name: &'static str,
    pub icon: &'static str,
    pub threshold: u64,
}

/// Titles in ascending threshold order.
pub static TITLES: &[Title] = &[
    Title { name: "Beginner", icon: "🌱", threshold: 0 },
    Title { name: "Student", icon: "📚", threshold: 100 },
    Title { name: "Scholar", icon: "🎓", threshold: 300 },
    Title { name: "Expert", icon: "⭐", threshold: 600 },
    Title { name: "Master Teacher", icon: "👨‍🏫", threshold: 1000 },
    Title { name: "Professor", icon: "🎯", threshold: 1500 },
    Title { name: "Guru", icon: "🧙‍♂️", threshold: 2500 },
    Title { name: "Legend", icon: "👑", threshold: 5000 },
];

impl Title {
    /// The highest title reached with `coins`.
    pub fn for_coins(coins: u64) -> &'static Title {
        TITLES
            .iter()
            .rev()
            .find(|title| coins >= title.threshold)
            .unwrap_or(&TITLES[0])
    }

    pub fn by_name(name: &str) -> Option<&'static Title> {
        TITLES.iter().find(|title| title.name == name)
    }
}

/// Accumulated teaching progress for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_coins: u64,
    pub total_experience: u64,
    pub current_title: String,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            total_coins: 0,
            total_experience: 0,
            current_title: TITLES[0].name.to_string(),
        }
    }
}

impl Progress {
    /// Adds a session reward. Returns the newly earned title, if any.
    pub fn claim(&mut self, reward: SessionReward) -> Option<&'static Title> {
        self.total_coins = self.total_coins.saturating_add(reward.coins);
        self.total_experience = self.total_experience.saturating_add(reward.experience);

        let reached = Title::for_coins(self.total_coins);
        if reached.name != self.current_title {
            self.current_title = reached.name.to_string();
            Some(reached)
        } else {
            None
        }
    }

    pub fn level(&self) -> u64 {
        self.total_experience / XP_PER_LEVEL + 1
    }

    /// Experience gathered towards the next level.
    pub fn level_progress(&self) -> u64 {
        self.total_experience % XP_PER_LEVEL
    }

    /// The stored title, falling back to the first title if the name is unknown.
    pub fn title(&self) -> &'static Title {
        Title::by_name(&self.current_title).unwrap_or(&TITLES[0])
    }

    pub fn next_title(&self) -> Option<&'static Title> {
        let current = self.title();
        TITLES.iter().find(|title| title.threshold > current.threshold)
    }

    pub fn coins_to_next_title(&self) -> Option<u64> {
        self.next_title()
            .map(|next| next.threshold.saturating_sub(self.total_coins))
    }

    /// Percentage of the way from the current title to the next one.
    pub fn title_progress_percent(&self) -> f64 {
        let current = self.title();
        match self.next_title() {
            Some(next) => {
                let span = (next.threshold - current.threshold) as f64;
                let earned = self.total_coins.saturating_sub(current.threshold) as f64;
                (earned / span * 100.0).min(100.0)
            }
            None => 100.0,
        }
    }
}
