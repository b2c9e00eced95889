//! Ordering of values by the number of their occurrences.

use std::cmp::Ordering;
use std::collections::HashMap;
use crate::FrequencyTable;

/// Compares `(value, count)` pairs so that more frequent values come first,
/// and among equally frequent ones, the smaller value comes first.
#[inline] fn by_rank<V: Ord>((v1, c1): &(V, usize), (v2, c2): &(V, usize)) -> Ordering {
    c2.cmp(c1).then_with(|| v1.cmp(v2))
}

/// Sorts `(value, count)` pairs by rank. The order is total when the values are distinct.
pub(crate) fn rank_pairs<V: Ord>(pairs: &mut [(V, usize)]) {
    pairs.sort_unstable_by(by_rank)
}

/// Returns the keys of `freqs` ordered by the number of occurrences (descending),
/// with ties broken by the keys themselves (ascending).
///
/// The result does not depend on the iteration order of `freqs`.
pub fn rank<V: Ord + Clone, S>(freqs: &HashMap<V, usize, S>) -> Box<[V]> {
    let mut pairs: Vec<(&V, usize)> = freqs.iter().map(|(v, c)| (v, *c)).collect();
    rank_pairs(&mut pairs);
    pairs.into_iter().map(|(v, _)| v.clone()).collect()
}

/// Returns the characters of `freqs` from the most to the least frequent;
/// equally frequent characters are ordered by their code points.
///
/// # Example
///
/// ```
/// use maplit::hashmap;
///
/// let ranked = sics::sort_characters(&hashmap!('a' => 2, 'b' => 5, 'A' => 2));
/// assert_eq!(ranked.as_ref(), ['b', 'A', 'a']);
/// ```
#[inline] pub fn sort_characters(freqs: &FrequencyTable) -> Box<[char]> {
    rank(freqs)
}
