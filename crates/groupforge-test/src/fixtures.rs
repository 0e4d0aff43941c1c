//! Entry fixtures.

use groupforge_core::Entry;

/// Entries `p0..pN` each carrying a single `rating` value.
pub fn rated_entries(ratings: &[f64]) -> Vec<Entry> {
    scored_entries("rating", ratings)
}

/// Entries `p0..pN` each carrying one numeric field.
pub fn scored_entries(field_id: &str, values: &[f64]) -> Vec<Entry> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Entry::new(format!("p{i}")).with(field_id, *v))
        .collect()
}

/// A mixed roster of `n` players.
///
/// Fields: `rating` (number), `wins` (number), `gender` (select, one in
/// seven missing), `position` (select), `skill` (ranked category
/// Beginner/Intermediate/Advanced), `sports` (multiselect), `captain`
/// (checkbox). Values are a deterministic function of the index.
pub fn league_roster(n: usize) -> Vec<Entry> {
    const POSITIONS: [&str; 4] = ["Guard", "Forward", "Center", "Wing"];
    const SKILLS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];
    const SPORTS: [&str; 5] = ["soccer", "tennis", "chess", "golf", "rowing"];

    (0..n)
        .map(|i| {
            let mut entry = Entry::new(format!("player-{i:04}"))
                .with("rating", ((i * 37) % 100) as f64 / 10.0)
                .with("wins", ((i * 13) % 21) as f64)
                .with("position", POSITIONS[i % POSITIONS.len()])
                .with("skill", SKILLS[(i / 2) % SKILLS.len()])
                .with(
                    "sports",
                    vec![SPORTS[i % SPORTS.len()], SPORTS[(i / 3) % SPORTS.len()]],
                )
                .with("captain", i % 5 == 0);
            if i % 7 != 3 {
                entry = entry.with("gender", if i % 2 == 0 { "Female" } else { "Male" });
            }
            entry
        })
        .collect()
}
