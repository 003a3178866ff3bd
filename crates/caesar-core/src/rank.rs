// crates/caesar-core/src/rank.rs

use crate::alphabet::ALPHABET_SIZE;
use crate::dist::LetterDist;
use crate::metric::Metric;

/// Number of candidates kept by [`rank_shifts`].
pub const TOP_N: usize = 3;

/// Shift value marking an unfilled slot. Never a valid alphabet shift.
pub const UNFILLED_SHIFT: i32 = -1;

/// One shift hypothesis and its distance to the observed histogram.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub shift: i32,
    pub distance: f64,
}

impl Candidate {
    pub const SENTINEL: Candidate = Candidate {
        shift: UNFILLED_SHIFT,
        distance: f64::INFINITY,
    };

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.shift == UNFILLED_SHIFT
    }

    /// The shift as an alphabet rotation, or `None` for an unfilled slot.
    #[inline]
    pub fn shift(&self) -> Option<u8> {
        u8::try_from(self.shift).ok()
    }
}

/// Bounded list of the `N` lowest-distance candidates, ascending.
///
/// Always holds exactly `N` entries; slots nobody has claimed yet are
/// [`Candidate::SENTINEL`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TopN<const N: usize> {
    slots: [Candidate; N],
}

impl<const N: usize> TopN<N> {
    pub fn new() -> Self {
        Self {
            slots: [Candidate::SENTINEL; N],
        }
    }

    /// Insert at the first slot whose distance is strictly greater, pushing
    /// the tail down and dropping the last entry.
    ///
    /// Ties never displace: an equal distance lands after the existing entry
    /// (or is dropped), so the earlier-offered shift keeps its place.
    /// NaN compares false everywhere and is never inserted.
    ///
    /// Returns the slot index used, if any.
    pub fn offer(&mut self, shift: u8, distance: f64) -> Option<usize> {
        let k = self.slots.iter().position(|c| distance < c.distance)?;
        self.slots.copy_within(k..N - 1, k + 1);
        self.slots[k] = Candidate {
            shift: shift as i32,
            distance,
        };
        Some(k)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.slots.iter()
    }

    /// Best candidate, if any slot was filled.
    pub fn best(&self) -> Option<&Candidate> {
        self.slots.first().filter(|c| !c.is_sentinel())
    }

    /// Number of non-sentinel entries.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|c| !c.is_sentinel()).count()
    }

    pub fn contains_shift(&self, shift: u8) -> bool {
        self.slots.iter().any(|c| c.shift() == Some(shift))
    }
}

impl<const N: usize> Default for TopN<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::ops::Index<usize> for TopN<N> {
    type Output = Candidate;

    fn index(&self, i: usize) -> &Candidate {
        &self.slots[i]
    }
}

impl<'a, const N: usize> IntoIterator for &'a TopN<N> {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Score every shift 0..26 and keep the best [`TOP_N`].
pub fn rank_shifts(histogram: &LetterDist, reference: &LetterDist, metric: Metric) -> TopN<TOP_N> {
    rank_shifts_n::<TOP_N>(histogram, reference, metric)
}

/// [`rank_shifts`] with a caller-chosen capacity.
///
/// For hypothesis `s` the reference is rotated forward by `s` (plaintext
/// letter `i` shows up as ciphertext letter `i + s`) and compared against
/// the histogram. Shifts are scanned in increasing order, so the lower
/// shift wins a tie.
pub fn rank_shifts_n<const N: usize>(
    histogram: &LetterDist,
    reference: &LetterDist,
    metric: Metric,
) -> TopN<N> {
    let mut top = TopN::<N>::new();
    for s in 0..ALPHABET_SIZE as u8 {
        let expected = reference.rotated(s);
        let distance = metric.distance(histogram, &expected);
        let slot = top.offer(s, distance);
        tracing::trace!(%metric, shift = s, distance, ?slot, "shift hypothesis");
    }
    top
}
