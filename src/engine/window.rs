use std::ops::Range;

/// A read-only view over a column range of a row
///
/// Columns past the end of the row are clamped away.
pub struct RowWindow<'a> {
    row: &'a [u8],
    columns: Range<usize>,
}
impl<'a> RowWindow<'a> {
    pub fn new(row: &'a [u8], columns: Range<usize>) -> Self {
        let end = columns.end.min(row.len());
        let start = columns.start.min(end);
        Self {
            row,
            columns: start..end,
        }
    }

    /// Iterates the live cells in the window as offsets from the window start
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.row[self.columns.clone()]
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(|(i, _)| i)
    }
}

impl<'a> std::fmt::Display for RowWindow<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last = None;
        for alive in self.iter() {
            // pad with spaces up to the live cell
            let padding = match last {
                Some(last) => alive - last - 1,
                None => alive,
            };
            write!(f, "{0: <1$}█", "", padding)?;
            last = Some(alive);
        }
        Ok(())
    }
}
