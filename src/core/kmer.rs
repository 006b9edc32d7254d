use serde::{Deserialize, Serialize};

use crate::core::error::AssemblyError;
use crate::utils::validation::{find_invalid_base, MIN_KMER_LENGTH};

/// A validated, non-empty multiset of equal-length k-mers.
///
/// Order and case of the input are preserved. Repeated k-mers are kept;
/// each occurrence becomes its own edge in the de Bruijn graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKmerSet")]
pub struct KmerSet {
    kmers: Vec<String>,
    k: usize,
}

/// Unchecked wire form of a [`KmerSet`]; deserialized sets go through
/// [`KmerSet::new`] like any other input.
#[derive(Deserialize)]
struct RawKmerSet {
    kmers: Vec<String>,
    k: usize,
}

impl TryFrom<RawKmerSet> for KmerSet {
    type Error = AssemblyError;

    fn try_from(raw: RawKmerSet) -> Result<Self, Self::Error> {
        let set = Self::new(raw.kmers)?;
        if set.k != raw.k {
            return Err(AssemblyError::InvalidInput(format!(
                "declared k = {} but k-mers have length {}",
                raw.k, set.k
            )));
        }
        Ok(set)
    }
}

impl KmerSet {
    /// Validate a collection of k-mers.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::InvalidInput` if the collection is empty, if any
    /// k-mer is shorter than 2, if lengths differ, or if a k-mer contains a
    /// character outside {a, c, g, t} (either case).
    pub fn new<I, S>(kmers: I) -> Result<Self, AssemblyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kmers: Vec<String> = kmers.into_iter().map(Into::into).collect();

        let Some(first) = kmers.first() else {
            return Err(AssemblyError::InvalidInput(
                "no k-mers supplied".to_string(),
            ));
        };
        let k = first.len();

        if k < MIN_KMER_LENGTH {
            return Err(AssemblyError::InvalidInput(format!(
                "k-mer length {k} is too short (minimum {MIN_KMER_LENGTH})"
            )));
        }

        for (index, kmer) in kmers.iter().enumerate() {
            if kmer.len() != k {
                return Err(AssemblyError::InvalidInput(format!(
                    "k-mer #{} '{}' has length {}, expected {k}",
                    index + 1,
                    kmer,
                    kmer.len()
                )));
            }
            if let Some((pos, c)) = find_invalid_base(kmer) {
                return Err(AssemblyError::InvalidInput(format!(
                    "k-mer #{} '{}' has invalid character '{c}' at position {}",
                    index + 1,
                    kmer,
                    pos + 1
                )));
            }
        }

        Ok(Self { kmers, k })
    }

    /// Length shared by every k-mer
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of k-mers, counting repeats
    #[must_use]
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    /// Always false: a `KmerSet` holds at least one k-mer
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.kmers.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.kmers
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.kmers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let set = KmerSet::new(["acg", "cgt", "ACG"]).unwrap();
        assert_eq!(set.k(), 3);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        // Case and order are preserved
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["acg", "cgt", "ACG"]);
    }

    #[test]
    fn test_new_keeps_duplicates() {
        let set = KmerSet::new(vec!["aaa".to_string(); 4]).unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_new_empty() {
        let result = KmerSet::new(Vec::<String>::new());
        assert!(matches!(result, Err(AssemblyError::InvalidInput(_))));
    }

    #[test]
    fn test_new_too_short() {
        let result = KmerSet::new(["a", "c"]);
        assert!(matches!(result, Err(AssemblyError::InvalidInput(_))));

        let result = KmerSet::new([""]);
        assert!(matches!(result, Err(AssemblyError::InvalidInput(_))));
    }

    #[test]
    fn test_new_inconsistent_lengths() {
        let err = KmerSet::new(["acg", "cgta"]).unwrap_err();
        match err {
            AssemblyError::InvalidInput(msg) => {
                assert!(msg.contains("#2"));
                assert!(msg.contains("expected 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_invalid_character() {
        let err = KmerSet::new(["acg", "cNt"]).unwrap_err();
        match err {
            AssemblyError::InvalidInput(msg) => assert!(msg.contains("'N'")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let set: KmerSet = serde_json::from_str(r#"{"kmers":["acg","cgt"],"k":3}"#).unwrap();
        assert_eq!(set, KmerSet::new(["acg", "cgt"]).unwrap());

        for json in [
            r#"{"kmers":["acg","t"],"k":3}"#,
            r#"{"kmers":[],"k":0}"#,
            r#"{"kmers":["a"],"k":1}"#,
            r#"{"kmers":["acg"],"k":4}"#,
            r#"{"kmers":["anc"],"k":3}"#,
        ] {
            let result = serde_json::from_str::<KmerSet>(json);
            assert!(result.is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_serialize_round_trips_through_validation() {
        let set = KmerSet::new(["gt", "ta", "gt"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let back: KmerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_into_inner() {
        let set = KmerSet::new(["gt", "ta"]).unwrap();
        assert_eq!(set.into_inner(), vec!["gt".to_string(), "ta".to_string()]);
    }
}
