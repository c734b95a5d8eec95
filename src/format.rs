use itertools::Itertools;

use crate::model::group::{Partition, Team};

/// Plain-text line-up suitable for pasting into a group chat.
///
/// ```text
/// *Sunday 5-a-side*
///
/// *TEAMS*
///
/// *Team 1*
/// 1. Ana
/// 2. Bruno
///
/// *Team 2*
/// 1. Caio
/// 2. Duda
///
/// Have a good game!
/// ```
pub fn format_announcement(partition: &Partition, title: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        text.push_str(&format!("*{title}*\n\n"));
    }
    text.push_str("*TEAMS*\n\n");
    let mut blocks = partition.iter().enumerate().map(|(index, team)| team_block(index, team));
    text.push_str(&blocks.join("\n"));
    text.push_str("\nHave a good game!");
    text
}

fn team_block(index: usize, team: &Team) -> String {
    let members = team
        .members
        .iter()
        .enumerate()
        .map(|(position, member)| format!("{}. {}\n", position + 1, member.name))
        .join("");
    format!("*Team {}*\n{members}", index + 1)
}
