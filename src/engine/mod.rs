mod rule;
mod window;

pub use self::rule::RuleTable;
pub use self::window::RowWindow;
use crate::error::{AutomatonError, Result};
use std::ops::Range;

/// A one-dimensional elementary cellular automaton over a circular row
///
/// The engine owns two equally sized buffers. One holds the current row, the
/// other receives the next generation. `active` selects which is which, so a
/// step exchanges their roles without copying or allocating.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    buffers: [Vec<u8>; 2],
    active: usize,
    rule: RuleTable,
    generation: u64,
}

impl GenerationEngine {
    pub fn new(length: usize, initial: &[u8], rule: RuleTable) -> Result<Self> {
        if length < 1 {
            return Err(AutomatonError::InvalidLength(length));
        }
        if initial.len() != length {
            return Err(AutomatonError::InvalidInitialState(format!(
                "row has {} cells, expected {length}",
                initial.len()
            )));
        }
        if let Some(i) = initial.iter().position(|&cell| cell > 1) {
            return Err(AutomatonError::InvalidInitialState(format!(
                "cell {i} is {}, expected 0 or 1",
                initial[i]
            )));
        }

        Ok(Self {
            buffers: [initial.to_vec(), vec![0; length]],
            active: 0,
            rule,
            generation: 0,
        })
    }

    /// Computes the next generation and makes it current
    pub fn advance(&mut self) {
        let [a, b] = &mut self.buffers;
        let (current, next) = match self.active {
            0 => (&*a, b),
            _ => (&*b, a),
        };

        let len = current.len();
        for (i, cell) in next.iter_mut().enumerate() {
            let left = current[(i + len - 1) % len];
            let center = current[i];
            let right = current[(i + 1) % len];
            *cell = self.rule.lookup(RuleTable::code(left, center, right));
        }

        self.active ^= 1;
        self.generation += 1;
    }

    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    #[inline]
    pub fn current_row(&self) -> &[u8] {
        &self.buffers[self.active]
    }

    /// Number of completed calls to [`GenerationEngine::advance`]
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn rule(&self) -> RuleTable {
        self.rule
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.current_row().len()
    }

    /// Always false, a row holds at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current_row().iter().filter(|&&cell| cell == 1).count()
    }

    pub fn window(&self, columns: Range<usize>) -> RowWindow<'_> {
        RowWindow::new(self.current_row(), columns)
    }

    #[inline]
    pub fn into_row(self) -> Vec<u8> {
        let [a, b] = self.buffers;
        if self.active == 0 { a } else { b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(initial: &[u8], rule: u8) -> GenerationEngine {
        GenerationEngine::new(initial.len(), initial, RuleTable::from(rule)).expect("valid engine")
    }

    /// Single step computed by overwriting the row as it goes
    fn advance_in_place(row: &mut [u8], rule: RuleTable) {
        let len = row.len();
        for i in 0..len {
            let (l, c, r) = (row[(i + len - 1) % len], row[i], row[(i + 1) % len]);
            row[i] = rule.next_state(l, c, r).unwrap();
        }
    }

    #[test]
    fn starts_at_initial_row() {
        let initial = [0, 1, 1, 0, 1];
        let game = engine(&initial, 110);

        assert_eq!(game.current_row(), &initial);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.alive_count(), 3);
    }

    #[test]
    fn generation_counts_advances() {
        let mut game = engine(&[0, 0, 0, 1, 0, 0, 0], 30);
        for k in 1..=17 {
            game.advance();
            assert_eq!(game.generation(), k);
        }
        game.advance_by(3);
        assert_eq!(game.generation(), 20);
    }

    #[test]
    fn wraps_around_row_edges() {
        let mut game = engine(&[0, 0, 1, 0, 0], 30);
        game.advance();
        assert_eq!(game.current_row(), &[0, 1, 1, 1, 0]);

        // index 0's left neighbor is index 4, index 4's right neighbor is index 0
        let mut game = engine(&[1, 0, 0, 0, 0], 30);
        game.advance();
        assert_eq!(game.current_row(), &[1, 1, 0, 0, 1]);
    }

    #[test]
    fn single_cell_row_is_its_own_neighbor() {
        // neighborhood is always (c, c, c)
        let mut game = engine(&[1], 0b1000_0000);
        game.advance();
        assert_eq!(game.current_row(), &[1]);

        let mut game = engine(&[0], 0b0000_0001);
        game.advance();
        assert_eq!(game.current_row(), &[1]);
    }

    #[test]
    fn next_row_reads_only_previous_row() {
        let mut game = engine(&[1, 0, 0], 30);
        game.advance();
        assert_eq!(game.current_row(), &[1, 1, 1]);

        let mut in_place = [1, 0, 0];
        advance_in_place(&mut in_place, RuleTable::from(30));
        assert_ne!(game.current_row(), &in_place);
    }

    #[test]
    fn buffers_alternate_without_stale_cells() {
        // rule 0 kills everything, rule 255 fills everything
        let mut game = engine(&[1, 0, 1, 0], 0);
        game.advance();
        assert_eq!(game.current_row(), &[0, 0, 0, 0]);
        game.advance();
        assert_eq!(game.current_row(), &[0, 0, 0, 0]);

        let mut game = engine(&[0, 0, 0, 0], 255);
        game.advance_by(3);
        assert_eq!(game.current_row(), &[1, 1, 1, 1]);
    }

    #[test]
    fn identical_engines_stay_identical() {
        let initial = [0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0];
        let mut a = engine(&initial, 110);
        let mut b = engine(&initial, 110);
        for _ in 0..64 {
            a.advance();
            b.advance();
            assert_eq!(a.current_row(), b.current_row());
        }
    }

    #[test]
    fn matches_rule_lookup_per_cell() {
        let initial = [1, 1, 0, 1, 0, 0, 0, 1, 1];
        let rule = RuleTable::from(73);
        let mut game = GenerationEngine::new(initial.len(), &initial, rule).unwrap();
        game.advance();

        let len = initial.len();
        for i in 0..len {
            let expected = rule
                .next_state(initial[(i + len - 1) % len], initial[i], initial[(i + 1) % len])
                .unwrap();
            assert_eq!(game.current_row()[i], expected, "cell {i}");
        }
    }

    #[test]
    fn rejects_zero_length() {
        let err = GenerationEngine::new(0, &[], RuleTable::from(30)).unwrap_err();

        assert_eq!(err, AutomatonError::InvalidLength(0));
    }

    #[test]
    fn rejects_bad_initial_rows() {
        let rule = RuleTable::from(30);

        assert!(matches!(
            GenerationEngine::new(4, &[0, 1, 0], rule),
            Err(AutomatonError::InvalidInitialState(_))
        ));
        assert!(matches!(
            GenerationEngine::new(3, &[0, 3, 0], rule),
            Err(AutomatonError::InvalidInitialState(_))
        ));
    }

    #[test]
    fn window_follows_current_row() {
        let mut game = engine(&[0, 0, 1, 0, 0], 30);
        game.advance();

        assert_eq!(game.window(1..4).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(game.window(0..5).to_string(), " ███");
    }

    #[test]
    fn into_row_returns_current_buffer() {
        let mut game = engine(&[0, 0, 1, 0, 0], 30);
        game.advance();
        let current = game.current_row().to_vec();

        assert_eq!(game.into_row(), current);
    }
}
