use crate::error::{AutomatonError, Result};
use std::{fmt, str::FromStr};

/// The number of 3-cell neighborhoods, `left`, `center`, `right`
const PERMUTATIONS: usize = 1 << 3;

/// Lookup table for an elementary cellular automaton rule
///
/// The table is indexed by a 3-bit neighborhood code where the left neighbor
/// is the most significant bit: `left << 2 | center << 1 | right`.
/// Each entry is the next state of the center cell, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    entries: [u8; PERMUTATIONS],
}

impl RuleTable {
    /// Builds the table from a Wolfram rule number
    ///
    /// Bit `b` of the rule number is the next state for neighborhood code `b`.
    pub fn from_rule_number(n: i64) -> Result<Self> {
        let n = u8::try_from(n)
            .map_err(|_| AutomatonError::InvalidRule(format!("rule number {n} not in 0..=255")))?;
        Ok(Self::from(n))
    }

    /// Builds the table from 8 explicit entries, neighborhood code 0 first
    pub fn from_explicit_table(entries: &[u8]) -> Result<Self> {
        let entries: [u8; PERMUTATIONS] = entries.try_into().map_err(|_| {
            AutomatonError::InvalidRule(format!(
                "explicit table has {} entries, expected {PERMUTATIONS}",
                entries.len()
            ))
        })?;
        if let Some((code, value)) = entries.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(AutomatonError::InvalidRule(format!(
                "table entry {code} is {value}, expected 0 or 1"
            )));
        }
        Ok(Self { entries })
    }

    /// Returns the next state of `center` given its neighbors
    pub fn next_state(&self, left: u8, center: u8, right: u8) -> Result<u8> {
        if left > 1 || center > 1 || right > 1 {
            return Err(AutomatonError::InvalidInput {
                left,
                center,
                right,
            });
        }
        Ok(self.lookup(Self::code(left, center, right)))
    }

    /// The neighborhood code for three binary cells
    #[inline]
    pub(super) fn code(left: u8, center: u8, right: u8) -> usize {
        ((left << 2) | (center << 1) | right) as usize
    }

    /// Unchecked lookup, `code` must be in `0..8`
    #[inline]
    pub(super) fn lookup(&self, code: usize) -> u8 {
        self.entries[code]
    }

    /// The Wolfram rule number equivalent to this table
    pub fn rule_number(&self) -> u8 {
        self.entries
            .iter()
            .enumerate()
            .fold(0, |acc, (code, &bit)| acc | (bit << code))
    }

    #[inline]
    pub fn entries(&self) -> [u8; PERMUTATIONS] {
        self.entries
    }
}

impl From<u8> for RuleTable {
    fn from(n: u8) -> Self {
        let mut entries = [0; PERMUTATIONS];
        for (code, entry) in entries.iter_mut().enumerate() {
            *entry = (n >> code) & 1;
        }
        Self { entries }
    }
}

impl FromStr for RuleTable {
    type Err = AutomatonError;

    /// Parses either a rule number (`"30"`) or 8 table digits (`"01111000"`)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() == PERMUTATIONS && s.bytes().all(|b| b == b'0' || b == b'1') {
            let entries: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
            return Self::from_explicit_table(&entries);
        }
        let n = s
            .parse::<i64>()
            .map_err(|_| AutomatonError::InvalidRule(format!("cannot parse rule {s:?}")))?;
        Self::from_rule_number(n)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.rule_number())
    }
}
