/*!
This module provides access to the MultiAlignment, which builds a padded multiple alignment from rows that are each pairwise aligned to a shared root.

# Example usage
```rust
use padded_msa::align_row::AlignRow;
use padded_msa::multi_alignment::MultiAlignment;

let rows = vec![
    AlignRow::from_op_string(b"GAT", b"MMIM", 0, "gap").unwrap(),
    AlignRow::from_op_string(b"GAACT", b"MMDMM", 0, "extra").unwrap(),
];

let msa = MultiAlignment::new(b"GACT", rows).unwrap();
assert_eq!(msa.num_columns().unwrap(), 5);
assert_eq!(msa.padded_row(0).unwrap(), b"GA-CT"); // root
assert_eq!(msa.padded_row(1).unwrap(), b"GA--T");
assert_eq!(msa.padded_row(2).unwrap(), b"GAACT");
assert_eq!(msa.get_idx_by_name("extra").unwrap(), 2);
```
*/

use log::{debug, trace};

use crate::align_row::AlignRow;
use crate::msa_config::MsaConfig;
use crate::msa_error::{MsaError, Result};
use crate::sequence_alignment::{ops_to_string, EditOp};

/// Output symbol for a column where the row has no base but is covered
pub const PAD_SYMBOL: u8 = b'-';
/// Output symbol for a column the row does not cover
pub const NO_CALL_SYMBOL: u8 = b'.';

/// Tracks how far a single row has been parsed while the columns are built.
/// Rows are referenced by index into the alignment, so cursors never alias row data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct RowCursor {
    /// Index of the row this cursor walks
    row_index: usize,
    /// Next operation to process; anything past the end reads as a softclip
    op_index: usize,
    /// Next base in the row sequence to emit
    base_index: usize
}

impl RowCursor {
    fn new(row_index: usize) -> RowCursor {
        RowCursor {
            row_index,
            op_index: 0,
            base_index: 0
        }
    }

    /// Returns the operation under the cursor, treating exhausted rows as softclipped.
    fn symbol(&self, row: &AlignRow) -> EditOp {
        row.expanded_ops()
            .get(self.op_index)
            .copied()
            .unwrap_or(EditOp::Softclip)
    }

    /// Emits the next base of the row and advances past it.
    fn take_base(&mut self, row: &AlignRow, column: usize) -> Result<u8> {
        match row.sequence().get(self.base_index) {
            Some(&base) => {
                self.base_index += 1;
                Ok(base)
            },
            None => Err(MsaError::OutOfBounds(format!(
                "row {} has no base at index {} for column {}", self.row_index, self.base_index, column
            )))
        }
    }

    /// Applies the column mode to this row, returning the symbol to emit for the column.
    /// Rows that are held back (e.g. a match during a deletion column) are not advanced so they are handled in a later column.
    /// # Arguments
    /// * `mode` - the operation chosen for the whole column
    /// * `row` - the row this cursor is walking
    /// * `column` - the column being built, for error reporting
    /// # Errors
    /// * `InvariantViolation` if the row is deleting while the column is an insertion
    fn update_and_emit(&mut self, mode: EditOp, row: &AlignRow, column: usize) -> Result<u8> {
        let symbol = self.symbol(row);
        let output = match (mode, symbol) {
            (EditOp::Deletion, EditOp::Deletion) => {
                self.op_index += 1;
                self.take_base(row, column)?
            },
            (EditOp::Deletion, EditOp::Softclip) => NO_CALL_SYMBOL,
            (EditOp::Deletion, _) => PAD_SYMBOL,
            (EditOp::Insertion, EditOp::Insertion) => {
                // the row lacks this root base, so it only gets a gap
                self.op_index += 1;
                PAD_SYMBOL
            },
            (EditOp::Insertion, EditOp::Deletion) => {
                return Err(MsaError::InvariantViolation { row: self.row_index, column });
            },
            (_, EditOp::Softclip) => {
                self.op_index += 1;
                NO_CALL_SYMBOL
            },
            _ => {
                self.op_index += 1;
                self.take_base(row, column)?
            }
        };
        Ok(output)
    }
}

/// Picks the operation for a column from the row operations: any deletion wins, then insertion, then match.
/// Returns None when every row is softclipped, which means there are no more columns.
fn column_mode<I: IntoIterator<Item = EditOp>>(symbols: I) -> Option<EditOp> {
    let mut has_insertion = false;
    let mut has_match = false;
    for symbol in symbols {
        match symbol {
            EditOp::Deletion => return Some(EditOp::Deletion),
            EditOp::Insertion => has_insertion = true,
            EditOp::Match => has_match = true,
            EditOp::Softclip => {}
        }
    }

    if has_insertion {
        Some(EditOp::Insertion)
    } else if has_match {
        Some(EditOp::Match)
    } else {
        None
    }
}

/// A padded multiple alignment of a root sequence and the rows aligned to it.
/// Row 0 is always the root; the input rows follow in the order they were provided.
#[derive(Clone, Debug)]
pub struct MultiAlignment {
    /// All rows, root first, each with a fully built padded sequence
    rows: Vec<AlignRow>,
    /// The config for this alignment
    config: MsaConfig
}

impl MultiAlignment {
    /// Builds the alignment with the default configuration.
    /// # Arguments
    /// * `root` - the root sequence that every row is aligned against
    /// * `rows` - the aligned rows, each with expanded operations relative to `root`
    /// # Errors
    /// * `InsufficientBases` if any row's operations need more bases than it has
    /// * `InvariantViolation` if the rows' operations cannot be synchronized
    pub fn new(root: &[u8], rows: Vec<AlignRow>) -> Result<MultiAlignment> {
        MultiAlignment::with_config(root, rows, MsaConfig::default())
    }

    /// Builds the alignment by walking every row in lockstep, emitting one symbol per row per column.
    /// # Arguments
    /// * `root` - the root sequence that every row is aligned against
    /// * `rows` - the aligned rows, each with expanded operations relative to `root`
    /// * `config` - rendering and consensus options
    /// # Errors
    /// * `InsufficientBases` if any row's operations need more bases than it has
    /// * `InvariantViolation` if the rows' operations cannot be synchronized
    pub fn with_config(root: &[u8], rows: Vec<AlignRow>, config: MsaConfig) -> Result<MultiAlignment> {
        let mut all_rows = Vec::with_capacity(rows.len() + 1);
        all_rows.push(AlignRow::root(root));
        all_rows.extend(rows);

        for (row_index, row) in all_rows.iter().enumerate() {
            row.validate()?;
            trace!("{}\t{}", row_index, ops_to_string(row.expanded_ops()));
        }

        let mut cursors: Vec<RowCursor> = (0..all_rows.len())
            .map(RowCursor::new)
            .collect();

        let mut column = 0;
        while let Some(mode) = column_mode(
            cursors.iter().map(|c| c.symbol(&all_rows[c.row_index]))
        ) {
            trace!("Column {} => {:?}", column, mode);

            // each row only depends on its own cursor and the shared mode
            let emitted: Vec<u8> = cursors.iter_mut()
                .map(|c| c.update_and_emit(mode, &all_rows[c.row_index], column))
                .collect::<Result<_>>()?;

            // all rows grow together so the padded lengths stay in sync
            for (row, symbol) in all_rows.iter_mut().zip(emitted) {
                row.push_padded(symbol);
            }
            column += 1;
        }

        debug!("Built multiple alignment with {} rows and {} columns", all_rows.len(), column);
        Ok(MultiAlignment {
            rows: all_rows,
            config
        })
    }

    /// Returns the number of columns in the alignment.
    /// # Errors
    /// * `EmptyInput` if there are no rows
    pub fn num_columns(&self) -> Result<usize> {
        match self.rows.first() {
            Some(row) => Ok(row.padded().len()),
            None => Err(MsaError::EmptyInput("alignment has no rows".to_string()))
        }
    }

    /// Returns the padded symbol at a row and column.
    /// # Errors
    /// * `OutOfBounds` if the row or column is outside the alignment
    pub fn get_symbol(&self, row_index: usize, column: usize) -> Result<u8> {
        let padded = self.padded_row(row_index)?;
        padded.get(column)
            .copied()
            .ok_or_else(|| MsaError::OutOfBounds(format!(
                "column {} is outside of row {} with {} columns", column, row_index, padded.len()
            )))
    }

    /// Converts a column into a base index for a row by subtracting the pad symbols that precede it.
    /// # Arguments
    /// * `row_index` - the row to inspect
    /// * `column` - the column to convert, which must not hold a pad symbol
    /// # Errors
    /// * `OutOfBounds` if the row or column is outside the alignment, if the column is a pad, or if every preceding column is a pad
    pub fn get_base_idx(&self, row_index: usize, column: usize) -> Result<usize> {
        let symbol = self.get_symbol(row_index, column)?;
        if symbol == PAD_SYMBOL {
            return Err(MsaError::OutOfBounds(format!(
                "row {} has a pad at column {}, not a base", row_index, column
            )));
        }

        let padded = self.padded_row(row_index)?;
        let pad_count = padded[..column].iter()
            .filter(|&&s| s == PAD_SYMBOL)
            .count();
        if pad_count >= column {
            return Err(MsaError::OutOfBounds(format!(
                "row {} has {} pads before column {}, no base index is defined", row_index, pad_count, column
            )));
        }
        Ok(column - pad_count)
    }

    /// Returns `length` padded symbols of a row starting at `start`.
    /// The requested range must end strictly before the end of the row.
    /// # Errors
    /// * `OutOfBounds` if the row is invalid or the range reaches the end of the row
    pub fn get_padded_substr(&self, row_index: usize, start: usize, length: usize) -> Result<&[u8]> {
        let padded = self.padded_row(row_index)?;
        let end = start.checked_add(length);
        match end {
            Some(end) if start < padded.len() && end < padded.len() => Ok(&padded[start..end]),
            _ => Err(MsaError::OutOfBounds(format!(
                "range {}+{} is not within row {} with {} columns", start, length, row_index, padded.len()
            )))
        }
    }

    /// Finds the index of the only row with the given name.
    /// # Errors
    /// * `NotFound` if no row has the name
    /// * `DuplicateName` if more than one row has the name
    pub fn get_idx_by_name(&self, name: &str) -> Result<usize> {
        let mut found: Option<usize> = None;
        for (row_index, row) in self.rows.iter().enumerate() {
            if row.name() == name {
                if found.is_some() {
                    return Err(MsaError::DuplicateName(name.to_string()));
                }
                found = Some(row_index);
            }
        }
        found.ok_or_else(|| MsaError::NotFound(name.to_string()))
    }

    /// Returns a single row, including its padded sequence.
    /// # Errors
    /// * `OutOfBounds` if the row does not exist
    pub fn row(&self, row_index: usize) -> Result<&AlignRow> {
        self.rows.get(row_index)
            .ok_or_else(|| MsaError::OutOfBounds(format!(
                "row {} is outside of alignment with {} rows", row_index, self.rows.len()
            )))
    }

    /// Returns the padded sequence of a row.
    /// # Errors
    /// * `OutOfBounds` if the row does not exist
    pub fn padded_row(&self, row_index: usize) -> Result<&[u8]> {
        Ok(self.row(row_index)?.padded())
    }

    // Getters
    pub fn rows(&self) -> &[AlignRow] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn config(&self) -> &MsaConfig {
        &self.config
    }
}
