//! Set-overlap similarity.

use std::collections::BTreeSet;

/// Jaccard similarity: |A ∩ B| / |A ∪ B|.
///
/// Returns 0.0 when both sets are empty. Symmetric, always in [0, 1].
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|x| large.contains(x)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
