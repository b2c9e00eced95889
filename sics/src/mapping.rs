use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use dyn_size_of::GetSize;
use log::debug;
use crate::{generate_codes, Code, CodecError, Decoder, Frequencies};

/// Assignment of codes to values.
///
/// Mappings constructed by [`build_mapping`] (or [`CodeMapping::from_ranked`]) assign
/// the `i`-th generated code to the `i`-th ranked value and are always injective.
/// Mappings converted from caller-built maps are not checked until [`CodeMapping::validate`]
/// or [`CodeMapping::inverse`] is called.
#[derive(Clone, Debug, Default)]
pub struct CodeMapping<V = char> {
    codes: HashMap<V, Code>
}

impl<V: Eq + Hash> PartialEq for CodeMapping<V> {
    fn eq(&self, other: &Self) -> bool { self.codes == other.codes }
}

impl<V: Eq + Hash> Eq for CodeMapping<V> {}

impl<V: Eq + Hash> CodeMapping<V> {
    /// Assigns successive codes to successive `ranked` values,
    /// which should be ordered from the most to the least frequent.
    pub fn from_ranked<I: IntoIterator<Item = V>>(ranked: I) -> Self {
        let codes: HashMap<V, Code> = ranked.into_iter().zip(generate_codes()).collect();
        debug!("built code mapping for {} values, {} symbols in the longest code",
            codes.len(), codes.values().map(Code::len).max().unwrap_or(0));
        Self { codes }
    }

    /// Returns the code assigned to `value` or `None` if `value` is not mapped.
    #[inline] pub fn code_of<Q>(&self, value: &Q) -> Option<Code> where V: Borrow<Q>, Q: Hash + Eq + ?Sized {
        self.codes.get(value).copied()
    }

    /// Returns the number of mapped values.
    #[inline] pub fn len(&self) -> usize { self.codes.len() }

    /// Returns whether no value is mapped.
    #[inline] pub fn is_empty(&self) -> bool { self.codes.is_empty() }

    /// Returns an iterator over (value, code) pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Code)> {
        self.codes.iter().map(|(v, c)| (v, *c))
    }

    /// Returns the length (in symbols) of the longest code, or 0 for an empty mapping.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Returns the number of symbols of the encoded sequence whose values occur with given frequencies,
    /// or `None` if any counted value is not mapped.
    ///
    /// The algorithm runs in *O(freqs.len())* time and does not encode anything.
    pub fn compressed_len<S: BuildHasher>(&self, freqs: &HashMap<V, usize, S>) -> Option<usize> {
        freqs.iter().try_fold(0usize, |acc, (value, count)|
            self.codes.get(value).map(|code| acc + code.len() * count)
        )
    }

    /// Appends the codes of all `values` to `output`.
    ///
    /// Returns [`CodecError::UnmappedValue`] for the first value without a code.
    /// In such a case, `output` contains the codes of all preceding values.
    pub fn encode<I>(&self, values: I, output: &mut String) -> Result<(), CodecError>
        where I: IntoIterator, I::Item: Borrow<V>, V: Debug
    {
        for (position, value) in values.into_iter().enumerate() {
            let value = value.borrow();
            match self.codes.get(value) {
                Some(code) => code.write_to(output),
                None => return Err(CodecError::UnmappedValue { position, value: format!("{:?}", value) })
            }
        }
        Ok(())
    }

    /// Checks whether distinct values have distinct codes.
    pub fn validate(&self) -> Result<(), CodecError> where V: Debug {
        let mut seen = HashMap::<Code, &V>::with_capacity(self.codes.len());
        self.codes.iter().try_for_each(|(value, code)| match seen.entry(*code) {
            Entry::Vacant(e) => { e.insert(value); Ok(()) },
            Entry::Occupied(e) => Err(non_injective(*code, *e.get(), value))
        })
    }

    /// Returns the inverse mapping (from codes to values) or
    /// [`CodecError::NonInjective`] if some code is assigned to more than one value.
    pub fn inverse(&self) -> Result<InverseMapping<V>, CodecError> where V: Clone + Debug {
        let mut values = HashMap::<Code, V>::with_capacity(self.codes.len());
        for (value, code) in self.codes.iter() {
            match values.entry(*code) {
                Entry::Vacant(e) => { e.insert(value.clone()); },
                Entry::Occupied(e) => {
                    let err = non_injective(*code, e.get(), value);
                    debug!("cannot invert code mapping: {}", err);
                    return Err(err);
                }
            }
        }
        Ok(InverseMapping { values })
    }
}

impl CodeMapping<char> {
    /// Counts characters of `text`, ranks them and assigns codes to them.
    ///
    /// # Example
    ///
    /// ```
    /// let mapping = sics::CodeMapping::from_text("abracadabra");
    /// assert_eq!(mapping.code_of(&'a').map(|c| c.to_string()), Some("0".to_owned()));
    /// assert_eq!(mapping.code_of(&'r').map(|c| c.to_string()), Some("2".to_owned()));
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self::from_ranked(crate::count_frequencies(text).into_ranked().into_vec())
    }
}

impl<V> From<HashMap<V, Code>> for CodeMapping<V> {
    /// Wraps the caller-built map without checking its injectivity.
    #[inline] fn from(codes: HashMap<V, Code>) -> Self { Self { codes } }
}

impl<V: GetSize> GetSize for CodeMapping<V> {
    fn size_bytes_dyn(&self) -> usize {
        self.codes.capacity() * std::mem::size_of::<(V, Code)>()
            + if V::USES_DYN_MEM { self.codes.keys().map(GetSize::size_bytes_dyn).sum::<usize>() } else { 0 }
    }
    const USES_DYN_MEM: bool = true;
}

/// Reports the values that share `code`, in a stable order.
fn non_injective<V: Debug>(code: Code, a: &V, b: &V) -> CodecError {
    let (a, b) = (format!("{:?}", a), format!("{:?}", b));
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    CodecError::NonInjective { code: code.to_string(), first, second }
}

/// Constructs the mapping that assigns the `i`-th generated code to `ranked[i]`.
///
/// The codes get longer by one symbol every 15 values, so any number of values can be mapped.
///
/// # Example
///
/// ```
/// let mapping = sics::build_mapping(&['e', 't', 'a']);
/// assert_eq!(mapping.code_of(&'t').map(|c| c.to_string()), Some("1".to_owned()));
/// ```
pub fn build_mapping<V: Eq + Hash + Clone>(ranked: &[V]) -> CodeMapping<V> {
    CodeMapping::from_ranked(ranked.iter().cloned())
}

/// Mapping from codes to values, obtained by [`CodeMapping::inverse`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InverseMapping<V = char> {
    values: HashMap<Code, V>
}

impl<V> InverseMapping<V> {
    /// Returns the value with given `code` or `None` if `code` is unknown.
    #[inline] pub fn get(&self, code: &Code) -> Option<&V> { self.values.get(code) }

    /// Returns the number of known codes.
    #[inline] pub fn len(&self) -> usize { self.values.len() }

    /// Returns whether no code is known.
    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns decoder that decodes values from the sequence of symbols.
    #[inline] pub fn decoder(&self) -> Decoder<'_, V> { Decoder::new(self) }
}

impl<V: GetSize> GetSize for InverseMapping<V> {
    fn size_bytes_dyn(&self) -> usize {
        self.values.capacity() * std::mem::size_of::<(Code, V)>()
            + if V::USES_DYN_MEM { self.values.values().map(GetSize::size_bytes_dyn).sum::<usize>() } else { 0 }
    }
    const USES_DYN_MEM: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use crate::{count_frequencies, sort_characters};

    fn code(s: &str) -> Code { s.parse().unwrap() }

    #[test]
    fn rank_order() {
        let mapping = build_mapping(&['e', 't', 'a', 'o']);
        assert_eq!(mapping.len(), 4);
        assert_eq!(mapping.code_of(&'e'), Some(code("0")));
        assert_eq!(mapping.code_of(&'o'), Some(code("3")));
        assert_eq!(mapping.code_of(&'x'), None);
        assert_eq!(mapping.max_code_len(), 1);
    }

    #[test]
    fn sixteen_values() {
        let text = "aaaaaaaaaaaaaaaaa\
                    bbbbbbbbbbbbbbbb\
                    ccccccccccccccc\
                    dddddddddddddd\
                    eeeeeeeeeeeee\
                    ffffffffffff\
                    ggggggggggg\
                    hhhhhhhhhh\
                    iiiiiiiii\
                    jjjjjjjj\
                    kkkkkkk\
                    llllll\
                    mmmmm\
                    nnnn\
                    ooo\
                    pp";
        let ranked = sort_characters(&count_frequencies(text));
        assert_eq!(ranked.len(), 16);
        let mapping = build_mapping(&ranked);
        assert_eq!(mapping.code_of(&'o'), Some(code("E")));
        assert_eq!(mapping.code_of(&'p'), Some(code("F0")));
        assert_eq!(mapping.max_code_len(), 2);
    }

    #[test]
    fn more_frequent_gets_earlier_code() {
        let freqs = count_frequencies("Old Marley was as dead as a door-nail. Mind! I don't mean to say that I know.");
        let mapping = build_mapping(&sort_characters(&freqs));
        for (a, ca) in freqs.iter() {
            for (b, cb) in freqs.iter() {
                if ca > cb { assert!(mapping.code_of(a) < mapping.code_of(b), "{a:?} vs {b:?}"); }
            }
        }
    }

    #[test]
    fn large_alphabet() {
        let ranked: Vec<char> = ('\u{100}'..='\u{4FF}').collect();
        let mapping = build_mapping(&ranked);
        assert_eq!(mapping.len(), 1024);
        assert_eq!(mapping.code_of(&'\u{4FF}'), Some(Code::at(1023)));
        assert_eq!(mapping.max_code_len(), 1023 / 15 + 1);
        assert!(mapping.validate().is_ok());
    }

    #[test]
    fn empty() {
        let mapping = build_mapping::<char>(&[]);
        assert!(mapping.is_empty());
        assert_eq!(mapping.max_code_len(), 0);
        assert!(mapping.inverse().unwrap().is_empty());
    }

    #[test]
    fn compressed_len() {
        let freqs = hashmap!('a' => 100usize, 'b' => 3);
        let mapping = CodeMapping::from(hashmap!('a' => code("FF1"), 'b' => code("7")));
        assert_eq!(mapping.compressed_len(&freqs), Some(303));
        assert_eq!(mapping.compressed_len(&hashmap!('c' => 1usize)), None);
    }

    #[test]
    fn encode_unmapped() {
        let mapping = build_mapping(&['a', 'b']);
        let mut output = String::new();
        assert_eq!(mapping.encode("abxa".chars(), &mut output),
                   Err(CodecError::UnmappedValue { position: 2, value: "'x'".to_owned() }));
        assert_eq!(output, "01");
    }

    #[test]
    fn validate_non_injective() {
        let mapping = CodeMapping::from(hashmap!('a' => code("0"), 'b' => code("F3"), 'c' => code("F3")));
        let expected = CodecError::NonInjective { code: "F3".to_owned(), first: "'b'".to_owned(), second: "'c'".to_owned() };
        assert_eq!(mapping.validate(), Err(expected.clone()));
        assert_eq!(mapping.inverse(), Err(expected));
    }

    #[test]
    fn inverse() {
        let mapping = CodeMapping::from(hashmap!('a' => code("0"), 'b' => code("FF3")));
        assert!(mapping.validate().is_ok());
        let inverse = mapping.inverse().unwrap();
        assert_eq!(inverse.len(), 2);
        assert_eq!(inverse.get(&code("FF3")), Some(&'b'));
        assert_eq!(inverse.get(&code("F3")), None);
    }

    #[test]
    fn iter() {
        let mapping = build_mapping(&['x', 'y', 'z']);
        let pairs: HashMap<char, Code> = mapping.iter().map(|(v, c)| (*v, c)).collect();
        assert_eq!(pairs, hashmap!('x' => code("0"), 'y' => code("1"), 'z' => code("2")));
        assert_eq!(CodeMapping::<char>::default().iter().count(), 0);
    }

    #[test]
    fn size_bytes() {
        let mapping = CodeMapping::from_text("abracadabra");
        assert!(mapping.size_bytes() >= 5 * std::mem::size_of::<(char, Code)>());
        assert!(mapping.inverse().unwrap().size_bytes_dyn() >= 5 * std::mem::size_of::<(Code, char)>());
    }
}
