//! Composite scoring for team balancing.

use groupforge_core::{Entry, WeightedField};

/// Weighted mean of each entry's raw field values.
///
/// Values are not range-normalized, so larger-magnitude statistics weigh
/// in proportionally. A missing value contributes 0 while its weight still
/// counts; zero total weight scores every entry 0.
///
/// # Example
///
/// ```
/// use groupforge_core::{Entry, WeightedField};
/// use groupforge_solver::balance::composite_scores;
///
/// let entries = vec![Entry::new("a").with("wins", 10.0).with("rating", 4.0)];
/// let fields = vec![WeightedField::new("wins", 1.0), WeightedField::new("rating", 3.0)];
///
/// assert_eq!(composite_scores(&entries, &fields), vec![5.5]);
/// ```
pub fn composite_scores(entries: &[Entry], fields: &[WeightedField]) -> Vec<f64> {
    let total_weight: f64 = fields.iter().map(|f| f.weight).sum();
    entries
        .iter()
        .map(|entry| {
            if total_weight <= 0.0 {
                return 0.0;
            }
            let weighted: f64 = fields
                .iter()
                .map(|f| f.weight * entry.get(&f.field_id).as_number().unwrap_or(0.0))
                .sum();
            weighted / total_weight
        })
        .collect()
}
