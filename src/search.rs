use crate::player::PlayerRecord;

/// Filter a top-to-bottom snapshot by id digits or name, case-insensitively.
/// A blank query keeps everything.
pub fn filter_players(snapshot: &[PlayerRecord], query: &str) -> Vec<PlayerRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return snapshot.to_vec();
    }

    snapshot
        .iter()
        .filter(|p| p.id.to_string().contains(&needle) || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
