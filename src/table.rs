use crate::error::{Result, SieveError};

/// A sieve table: one bool per represented number, in a single contiguous allocation.
///
/// Cells start out as prime candidates and only ever get struck during marking. Iterating a Table
/// yields the indices of the surviving cells in ascending order.
pub struct Table {
    cells: Vec<bool>,
    cursor: usize,
}

impl Iterator for Table {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cells.get(self.cursor..)?.iter().position(|&cell| cell)?;
        let index = self.cursor + offset;
        self.cursor = index + 1;
        Some(index)
    }
}

impl Table {
    /// Allocate len cells, all set to value.
    pub fn filled(len: u64, value: bool) -> Result<Table> {
        let mut cells = Table::allocate(len)?;
        cells.resize(len as usize, value);

        Ok(Table { cells, cursor: 0 })
    }

    /// Allocate copies back-to-back repetitions of pattern.
    pub fn tiled(pattern: &[bool], copies: u64) -> Result<Table> {
        let len = (pattern.len() as u64)
            .checked_mul(copies)
            .ok_or_else(|| SieveError::exhausted(u64::MAX))?;
        let mut cells = Table::allocate(len)?;
        for _ in 0..copies {
            cells.extend_from_slice(pattern);
        }

        Ok(Table { cells, cursor: 0 })
    }

    fn allocate(len: u64) -> Result<Vec<bool>> {
        let capacity = usize::try_from(len).map_err(|_| SieveError::exhausted(len))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(capacity)
            .map_err(|source| SieveError::ResourceExhausted {
                cells: len,
                source: Some(source),
            })?;
        Ok(cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Out-of-range cells read as struck.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = true;
        }
    }

    #[inline]
    pub fn unset(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = false;
        }
    }

    /// Strike every cell in start, start + step, ... below end (clamped to the table).
    pub fn strike(&mut self, start: usize, end: usize, step: usize) {
        if step == 0 {
            return;
        }
        let end = end.min(self.cells.len());
        // Same as iterating (start..end).step_by(step), but cheaper per benchmarks.
        let mut multiple = start;
        while multiple < end {
            self.cells[multiple] = false;
            multiple += step;
        }
    }

    /// Drop every cell at or past len.
    pub fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }
}
