use rand::{seq::SliceRandom, Rng};

/// The array being sorted: positions into a [`Scale`](crate::Scale), plus a
/// highlight flag per position for the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteIndices {
    indices: Vec<usize>,
    highlighted: Vec<bool>,
}

impl NoteIndices {
    /// Creates `n` indices in ascending order with nothing highlighted.
    pub fn new(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            highlighted: vec![false; n],
        }
    }

    /// Resets to `0..n` and shuffles.
    pub fn initialize_and_shuffle<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        *self = Self::new(n);
        self.shuffle(rng);
    }

    /// Fisher-Yates shuffle of the current indices. Clears all highlights.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.indices.shuffle(rng);
        self.clear_highlights();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn notes(&self) -> &[usize] {
        &self.indices
    }

    /// Mutable access for replay. The length cannot change through it.
    pub fn notes_mut(&mut self) -> &mut [usize] {
        &mut self.indices
    }

    /// Highlights `index`; out-of-range positions are ignored.
    pub fn highlight(&mut self, index: usize) {
        if let Some(flag) = self.highlighted.get_mut(index) {
            *flag = true;
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }

    pub fn highlights(&self) -> &[bool] {
        &self.highlighted
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn starts_sorted_without_highlights() {
        let notes = NoteIndices::new(4);
        assert_eq!(notes.notes(), &[0, 1, 2, 3]);
        assert!(notes.highlights().iter().all(|flag| !flag));
    }

    #[test]
    fn shuffle_is_a_permutation_and_clears_highlights() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut notes = NoteIndices::new(32);
        notes.highlight(3);
        notes.shuffle(&mut rng);

        let mut sorted = notes.notes().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
        assert!(!notes.is_highlighted(3));
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut a = NoteIndices::default();
        let mut b = NoteIndices::default();
        a.initialize_and_shuffle(16, &mut StdRng::seed_from_u64(42));
        b.initialize_and_shuffle(16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn ignores_out_of_range_highlights() {
        let mut notes = NoteIndices::new(2);
        notes.highlight(5);
        assert!(!notes.is_highlighted(5));
        notes.highlight(1);
        assert!(notes.is_highlighted(1));
        notes.clear_highlights();
        assert!(!notes.is_highlighted(1));
    }
}
