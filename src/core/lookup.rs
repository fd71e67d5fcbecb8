use indexmap::IndexMap;

use crate::core::time_index::TimeStamp;

/// Maps a raw time value to its ordinal position in the domain array.
///
/// Rebuilt in lockstep with the domain; insertion order mirrors domain order,
/// so `position(domain[i]) == Some(i)` holds for every entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct IndexLookup {
    positions: IndexMap<TimeStamp, usize>,
}

impl IndexLookup {
    pub(crate) fn build(domain: &[TimeStamp]) -> Self {
        Self {
            positions: domain
                .iter()
                .enumerate()
                .map(|(position, &time)| (time, position))
                .collect(),
        }
    }

    pub(crate) fn position(&self, time: TimeStamp) -> Option<usize> {
        self.positions.get(&time).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::IndexLookup;

    #[test]
    fn positions_mirror_domain_order() {
        let domain = vec![10, 20, 40, 80];
        let lookup = IndexLookup::build(&domain);

        for (expected, &time) in domain.iter().enumerate() {
            assert_eq!(lookup.position(time), Some(expected));
        }
        assert_eq!(lookup.position(30), None);
    }
}
