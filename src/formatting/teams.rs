use colored::*;

use crate::error::ProvisionResult;
use crate::formatting::utils::{pluralize, truncate};
use crate::models::TeamRecord;

const NAME_WIDTH: usize = 32;

pub fn team_row(team: &TeamRecord) -> String {
    format!(
        "  {}  {}  {}, {}",
        format!("{:>8}", team.id.as_str()).dimmed(),
        format!("{:<width$}", truncate(&team.name, NAME_WIDTH), width = NAME_WIDTH).cyan(),
        pluralize(team.members.len(), "member", "members"),
        pluralize(team.admin_count(), "admin", "admins"),
    )
}

pub fn print_teams(teams: &[TeamRecord]) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    println!("{}", format!("Found {} teams:", teams.len()).bold());
    for team in teams {
        println!("{}", team_row(team));
    }
}

/// The directory snapshot as a JSON array, members included.
pub fn render_teams_json(teams: &[TeamRecord]) -> ProvisionResult<String> {
    Ok(serde_json::to_string(teams)?)
}
