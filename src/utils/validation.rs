//! Centralized validation and helper functions.

/// Maximum number of k-mers accepted from a single input (DOS protection)
pub const MAX_KMERS: usize = 50_000_000;

/// Smallest k for which a de Bruijn graph has non-empty node labels
pub const MIN_KMER_LENGTH: usize = 2;

/// Check whether a byte is one of the accepted nucleotides (a, c, g, t in either case).
///
/// # Examples
///
/// ```
/// use kmer_assembler::utils::validation::is_nucleotide;
///
/// assert!(is_nucleotide(b'a'));
/// assert!(is_nucleotide(b'G'));
/// assert!(!is_nucleotide(b'n'));
/// ```
#[must_use]
pub fn is_nucleotide(base: u8) -> bool {
    matches!(base.to_ascii_lowercase(), b'a' | b'c' | b'g' | b't')
}

/// Find the first character that is not a nucleotide.
/// Returns the character position and the character itself.
#[must_use]
pub fn find_invalid_base(s: &str) -> Option<(usize, char)> {
    s.char_indices().find(|&(_, c)| !c.is_ascii() || !is_nucleotide(c as u8))
}

/// Compute the MD5 checksum of a sequence.
///
/// The checksum is taken over the uppercase sequence, the usual convention
/// for sequence digests, so case differences do not change it.
#[must_use]
pub fn sequence_md5(sequence: &str) -> String {
    let uppercase: Vec<u8> = sequence.bytes().map(|b| b.to_ascii_uppercase()).collect();
    format!("{:x}", md5::compute(&uppercase))
}

/// Whether a collection already holding `count` k-mers is full.
///
/// Call this with the current count BEFORE adding a new k-mer.
#[must_use]
pub fn at_kmer_limit(count: usize) -> bool {
    count >= MAX_KMERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nucleotide() {
        for base in b"acgtACGT" {
            assert!(is_nucleotide(*base));
        }
        assert!(!is_nucleotide(b'n'));
        assert!(!is_nucleotide(b'N'));
        assert!(!is_nucleotide(b'u'));
        assert!(!is_nucleotide(b'-'));
        assert!(!is_nucleotide(b' '));
    }

    #[test]
    fn test_find_invalid_base() {
        assert_eq!(find_invalid_base("acgtACGT"), None);
        assert_eq!(find_invalid_base(""), None);
        assert_eq!(find_invalid_base("acgn"), Some((3, 'n')));
        assert_eq!(find_invalid_base("a-c"), Some((1, '-')));
        // Multi-byte characters are reported by byte offset
        assert_eq!(find_invalid_base("aé"), Some((1, 'é')));
    }

    #[test]
    fn test_sequence_md5() {
        // MD5 of "ACGT"
        assert_eq!(sequence_md5("ACGT"), "f1f8f4bf413b16ad135722aa4591043e");
        // Case-insensitive
        assert_eq!(sequence_md5("acgt"), sequence_md5("ACGT"));
        assert_eq!(sequence_md5("acgt").len(), 32);
    }

    #[test]
    fn test_at_kmer_limit() {
        assert!(!at_kmer_limit(100));
        assert!(!at_kmer_limit(MAX_KMERS - 1));
        assert!(at_kmer_limit(MAX_KMERS));
        assert!(at_kmer_limit(MAX_KMERS + 1));
    }
}
