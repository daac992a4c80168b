use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing role of a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Role {
    #[default]
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder", alias = "AllRounder")]
    AllRounder,
    #[serde(rename = "Wicket-Keeper", alias = "WicketKeeper")]
    WicketKeeper,
    Coach,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Batsman,
        Role::Bowler,
        Role::AllRounder,
        Role::WicketKeeper,
        Role::Coach,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "batsman" | "batter" => Some(Self::Batsman),
            "bowler" => Some(Self::Bowler),
            "all-rounder" | "allrounder" | "all_rounder" | "all rounder" => Some(Self::AllRounder),
            "wicket-keeper" | "wicketkeeper" | "wicket_keeper" | "wicket keeper" | "keeper"
            | "wk" => Some(Self::WicketKeeper),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
            Self::AllRounder => "All-Rounder",
            Self::WicketKeeper => "Wicket-Keeper",
            Self::Coach => "Coach",
        }
    }

    /// Label for the role-dependent statistic
    pub fn stat_label(&self) -> &'static str {
        match self {
            Self::Bowler => "Wickets",
            _ => "Runs",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(alias = "matches")]
    pub matches_played: i32,
    /// Runs, or wickets for bowlers
    #[serde(alias = "stat")]
    pub stat_value: i32,
}

impl PlayerRecord {
    pub fn new(id: i32, name: &str, role: Role, matches_played: i32, stat_value: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            role,
            matches_played,
            stat_value,
        }
    }

    pub fn stat_label(&self) -> &'static str {
        self.role.stat_label()
    }

    /// e.g. "37 Wickets"
    pub fn stat_display(&self) -> String {
        format!("{} {}", self.stat_value, self.stat_label())
    }

    /// Replace every mutable field; the id is left alone
    pub fn apply(&mut self, update: PlayerUpdate) {
        self.name = update.name;
        self.role = update.role;
        self.matches_played = update.matches_played;
        self.stat_value = update.stat_value;
    }
}

/// Replacement fields for an update by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub name: String,
    pub role: Role,
    pub matches_played: i32,
    pub stat_value: i32,
}
