use crate::player::PlayerRecord;

pub const TITLE: &str = "Players (Top → Bottom)";
const HEADERS: [&str; 5] = ["ID", "Name", "Role", "Matches", "Runs/Wickets"];

/// One display row per player, columns in header order
pub fn to_row(player: &PlayerRecord) -> [String; 5] {
    [
        player.id.to_string(),
        player.name.clone(),
        player.role.to_string(),
        player.matches_played.to_string(),
        player.stat_display(),
    ]
}

/// Render players as a plain-text table sized to its widest cells
pub fn render(players: &[PlayerRecord]) -> String {
    let rows: Vec<[String; 5]> = players.iter().map(to_row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no players)\n");
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
