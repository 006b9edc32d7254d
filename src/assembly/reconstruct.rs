use crate::graph::euler::Walk;

/// Spell out the sequence of a walk.
///
/// Consecutive nodes overlap in all but one base, so the sequence is the
/// first label followed by the last base of every later label. A walk of a
/// single node spells that node's label.
#[must_use]
pub fn reconstruct_sequence(walk: &Walk) -> String {
    let first = walk.first_label();
    let mut sequence = String::with_capacity(first.len() + walk.edge_count());
    sequence.push_str(first);

    for label in walk.labels().skip(1) {
        if let Some(last) = label.chars().last() {
            sequence.push(last);
        }
    }

    sequence
}
