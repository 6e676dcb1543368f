//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! The queue keeps the bag being drawn from plus the already shuffled next bag,
//! so the preview can always look one piece ahead across a bag boundary.
//!
//! A single [`StdRng`] is seeded once and advanced on every shuffle, including
//! the reshuffle on reset, which keeps a seeded game fully reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

const BAG_SIZE: usize = PieceKind::ALL.len();

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Bag currently being drawn from
    bag: [PieceKind; BAG_SIZE],
    /// Index into current bag
    bag_index: usize,
    /// Lookahead bag, shuffled ahead of time
    next_bag: [PieceKind; BAG_SIZE],
    rng: StdRng,
    seed: u64,
    /// Number of bags shuffled so far (including the lookahead)
    bags_shuffled: u64,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            next_bag: PieceKind::ALL,
            rng: StdRng::seed_from_u64(seed),
            seed,
            bags_shuffled: 0,
        };
        queue.reshuffle();
        queue
    }

    /// Create a queue seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn shuffled_bag(&mut self) -> [PieceKind; BAG_SIZE] {
        let mut bag = PieceKind::ALL;
        bag.shuffle(&mut self.rng);
        self.bags_shuffled += 1;
        bag
    }

    /// Throw away both bags and shuffle fresh ones.
    ///
    /// The generator keeps advancing; it is never reseeded.
    pub fn reshuffle(&mut self) {
        self.bag = self.shuffled_bag();
        self.next_bag = self.shuffled_bag();
        self.bag_index = 0;
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.bag
            .get(self.bag_index)
            .copied()
            .unwrap_or(self.next_bag[0])
    }

    /// Peek at the next `N` pieces, spilling into the lookahead bag.
    ///
    /// `N` must not exceed what the two bags hold.
    pub fn peek_n<const N: usize>(&self) -> [PieceKind; N] {
        let remaining = &self.bag[self.bag_index..];
        std::array::from_fn(|i| {
            remaining
                .get(i)
                .copied()
                .unwrap_or_else(|| self.next_bag[i - remaining.len()])
        })
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= BAG_SIZE {
            self.bag = self.next_bag;
            self.next_bag = self.shuffled_bag();
            self.bag_index = 0;
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// The seed this queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bags_shuffled(&self) -> u64 {
        self.bags_shuffled
    }

    /// Pieces left in the current bag
    pub fn current_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(pieces: &[PieceKind]) {
        assert_eq!(pieces.len(), 7);
        for kind in PieceKind::ALL {
            assert_eq!(
                pieces.iter().filter(|&&p| p == kind).count(),
                1,
                "{kind:?} should appear exactly once in {pieces:?}"
            );
        }
    }

    #[test]
    fn test_queue_deterministic_for_seed() {
        let mut a = PieceQueue::new(12345);
        let mut b = PieceQueue::new(12345);

        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_piece_queue_initial() {
        let queue = PieceQueue::new(1);
        assert_eq!(queue.current_bag().len(), 7);
        assert_eq!(queue.bags_shuffled(), 2);
    }

    #[test]
    fn test_every_bag_is_a_permutation() {
        let mut queue = PieceQueue::new(7);

        for _ in 0..20 {
            let bag: Vec<_> = (0..7).map(|_| queue.draw()).collect();
            assert_is_permutation(&bag);
        }
    }

    #[test]
    fn test_piece_queue_peek() {
        let mut queue = PieceQueue::new(1);

        let peeked = queue.peek();
        assert_eq!(peeked, queue.draw());
    }

    #[test]
    fn test_peek_after_seven_draws_previews_next_bag() {
        let mut queue = PieceQueue::new(1);
        for _ in 0..7 {
            queue.draw();
        }

        let peeked = queue.peek();
        assert_eq!(peeked, queue.draw());
    }

    #[test]
    fn test_peek_n_spans_bag_boundary() {
        let mut queue = PieceQueue::new(3);
        for _ in 0..5 {
            queue.draw();
        }

        let preview = queue.peek_n::<5>();
        let drawn: Vec<_> = (0..5).map(|_| queue.draw()).collect();
        assert_eq!(preview.as_slice(), drawn.as_slice());
    }

    #[test]
    fn test_reshuffle_advances_generator() {
        let mut queue = PieceQueue::new(99);
        queue.reshuffle();

        assert_eq!(queue.bags_shuffled(), 4);
        assert_eq!(queue.seed(), 99);
        assert_is_permutation(queue.current_bag());
    }
}
