//! Raw field input for the player form.
//!
//! Every field arrives as text; numeric fields must parse as integers after
//! trimming, otherwise the whole operation is rejected.

use crate::error::RosterError;
use crate::player::{PlayerRecord, PlayerUpdate, Role};

#[derive(Debug, Clone, Default)]
pub struct PlayerForm {
    pub id: String,
    pub name: String,
    pub role: String,
    pub matches: String,
    pub stat: String,
}

impl PlayerForm {
    /// Build a form from positional arguments: id, name, role, matches, stat
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [id, name, role, matches, stat] => Some(Self {
                id: id.clone(),
                name: name.clone(),
                role: role.clone(),
                matches: matches.clone(),
                stat: stat.clone(),
            }),
            _ => None,
        }
    }

    pub fn parse_id(&self) -> Result<i32, RosterError> {
        parse_id(&self.id)
    }

    pub fn into_record(self) -> Result<PlayerRecord, RosterError> {
        let id = self.parse_id()?;
        let update = self.into_update()?;
        Ok(PlayerRecord::new(
            id,
            &update.name,
            update.role,
            update.matches_played,
            update.stat_value,
        ))
    }

    pub fn into_update(self) -> Result<PlayerUpdate, RosterError> {
        let role = parse_role(&self.role)?;
        let matches_played = parse_int("matches", &self.matches)?;
        let stat_value = parse_int("stat", &self.stat)?;
        Ok(PlayerUpdate {
            name: self.name.trim().to_string(),
            role,
            matches_played,
            stat_value,
        })
    }
}

pub fn parse_id(text: &str) -> Result<i32, RosterError> {
    parse_int("id", text)
}

pub fn parse_role(text: &str) -> Result<Role, RosterError> {
    Role::from_str(text).ok_or_else(|| RosterError::validation("role", text))
}

fn parse_int(field: &'static str, text: &str) -> Result<i32, RosterError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| RosterError::validation(field, text))
}
