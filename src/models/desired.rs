use std::fmt;
use std::str::FromStr;

use crate::error::ProvisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Present,
    Absent,
}

impl FromStr for Presence {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Presence::Present),
            "absent" => Ok(Presence::Absent),
            other => Err(crate::provision_error!(
                InvalidInput,
                "state must be 'present' or 'absent', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Present => f.write_str("present"),
            Presence::Absent => f.write_str("absent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredTeamState {
    pub name: String,
    pub presence: Presence,
}

impl DesiredTeamState {
    pub fn new(name: impl Into<String>, presence: Presence) -> Self {
        Self { name: name.into(), presence }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredUserState {
    pub email: String,
    pub team: String,
    pub admin: bool,
    pub presence: Presence,
}

impl DesiredUserState {
    pub fn new(email: impl Into<String>, team: impl Into<String>, admin: bool, presence: Presence) -> Self {
        Self {
            email: email.into(),
            team: team.into(),
            admin,
            presence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presence() {
        assert_eq!("present".parse::<Presence>().unwrap(), Presence::Present);
        assert_eq!("absent".parse::<Presence>().unwrap(), Presence::Absent);
        assert!("gone".parse::<Presence>().is_err());
        assert_eq!(Presence::default(), Presence::Present);
    }
}
