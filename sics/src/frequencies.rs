//! Tools to count frequencies of values.

use std::collections::HashMap;
use fsum::FSum;
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use crate::rank::rank_pairs;

/// Numbers of occurrences of characters in a text.
pub type FrequencyTable<V = char> = HashMap<V, usize>;

/// Types that implement this trait can count number of occurrences of values.
pub trait Frequencies {
    /// Type of value.
    type Value;

    /// Constructs `Self` that counts occurrences of all values exposed by `iter`.
    fn with_counted_all<Iter: IntoIterator>(iter: Iter) -> Self
        where Iter::Item: Borrow<Self::Value>, Self: Default, Self::Value: Clone
    {
        iter.into_iter().fold(Self::default(), |mut counted, value| {
            counted.count(value.borrow().clone());
            counted
        })
    }

    /// Adds one to the stored number of `value` occurrences.
    fn count(&mut self, value: Self::Value);

    /// Calls `count` for all items exposed by `iter`.
    fn count_all<Iter: IntoIterator>(&mut self, iter: Iter) where Iter::Item: Borrow<Self::Value>, Self::Value: Clone {
        iter.into_iter().for_each(|value| self.count(value.borrow().clone()))
    }

    /// Returns the total number of occurrences of all values, i.e. the length of the counted sequence.
    fn total(&self) -> usize;

    /// Returns the Shannon entropy (in bits per value) of the values counted so far,
    /// or 0 if nothing was counted.
    fn entropy(&self) -> f64;

    /// Converts `self` to the boxed slice of distinct values,
    /// ordered by the number of occurrences (descending) and then by the values themselves (ascending).
    fn into_ranked(self) -> Box<[Self::Value]> where Self::Value: Ord;
}

impl<Value: Eq + Hash, S: BuildHasher> Frequencies for HashMap<Value, usize, S> {
    type Value = Value;

    fn count(&mut self, value: Value) {
        *self.entry(value).or_insert(0) += 1;
    }

    fn total(&self) -> usize {
        self.values().sum()
    }

    fn entropy(&self) -> f64 {
        // H = log2(n) - (sum of c*log2(c)) / n, where n is the total count
        let n = self.total();
        if n == 0 { return 0.0; }
        let weighted = FSum::with_all(self.values()
            .filter(|&&c| c != 0)
            .map(|&c| { let c = c as f64; c * c.log2() })).value();
        let n = n as f64;
        (n.log2() - weighted / n).max(0.0)
    }

    fn into_ranked(self) -> Box<[Self::Value]> where Self::Value: Ord {
        let mut pairs: Vec<(Value, usize)> = self.into_iter().collect();
        rank_pairs(&mut pairs);
        pairs.into_iter().map(|(value, _)| value).collect()
    }
}

/// Counts occurrences of each character of `text`.
///
/// # Example
///
/// ```
/// let freqs = sics::count_frequencies("abracadabra");
/// assert_eq!(freqs[&'a'], 5);
/// assert_eq!(freqs[&'c'], 1);
/// assert_eq!(freqs.len(), 5);
/// ```
pub fn count_frequencies(text: &str) -> FrequencyTable {
    FrequencyTable::with_counted_all(text.chars())
}
