/*!
This module provides the plurality-vote consensus over a padded multiple alignment.

# Example usage
```rust
use padded_msa::align_row::AlignRow;
use padded_msa::multi_alignment::MultiAlignment;

let rows = vec![
    AlignRow::from_op_string(b"GACT", b"MMMM", 0, "r1").unwrap(),
    AlignRow::from_op_string(b"GAT", b"MMIM", 0, "r2").unwrap(),
    AlignRow::from_op_string(b"GACT", b"MMMM", 0, "r3").unwrap(),
    AlignRow::from_op_string(b"GTCT", b"MMMM", 0, "r4").unwrap(), // the last row does not vote
];

let msa = MultiAlignment::new(b"GACT", rows).unwrap();
let consensus = msa.consensus().unwrap();
assert_eq!(consensus.sequence(), b"GACT");
assert_eq!(consensus.padded_sequence(), b"GACT");
```
*/

use itertools::Itertools;
use log::{debug, log_enabled, Level};
use rustc_hash::FxHashMap as HashMap;

use crate::msa_config::ConsensusRows;
use crate::msa_error::{MsaError, Result};
use crate::multi_alignment::{MultiAlignment, NO_CALL_SYMBOL, PAD_SYMBOL};

/// Contains a final consensus result
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Consensus {
    /// The ungapped consensus, trimmed of leading no-calls and cut at the first internal no-call
    sequence: Vec<u8>,
    /// The winning symbol for each processed column, including pads and no-calls
    padded_sequence: Vec<u8>
}

impl Consensus {
    /// Constructor
    pub fn new(sequence: Vec<u8>, padded_sequence: Vec<u8>) -> Consensus {
        Consensus {
            sequence,
            padded_sequence
        }
    }

    /// Assembles a consensus from the winning symbol of each column, left to right.
    /// Leading no-call columns are skipped, pads are left out of the ungapped sequence, and the first no-call after any called base stops the assembly.
    /// When the assembly stops, the padded sequence ends with the no-call that stopped it.
    /// # Arguments
    /// * `winners` - the winning symbol for each column
    /// # Examples
    /// ```rust
    /// use padded_msa::consensus::Consensus;
    /// let consensus = Consensus::from_column_winners(b"..G-A.CT".iter().copied());
    /// assert_eq!(consensus.sequence(), b"GA");
    /// assert_eq!(consensus.padded_sequence(), b"..G-A.");
    /// ```
    pub fn from_column_winners<I: IntoIterator<Item = u8>>(winners: I) -> Consensus {
        let mut sequence = vec![];
        let mut padded_sequence = vec![];
        for winner in winners {
            padded_sequence.push(winner);
            if winner == NO_CALL_SYMBOL {
                if sequence.is_empty() {
                    continue;
                }
                break;
            } else if winner != PAD_SYMBOL {
                sequence.push(winner);
            }
        }
        Consensus::new(sequence, padded_sequence)
    }

    // Getters
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn padded_sequence(&self) -> &[u8] {
        &self.padded_sequence
    }
}

/// Returns the most frequent symbol in a column, ignoring no-calls.
/// Ties go to the smallest symbol so the result does not depend on row order.
/// If there are no votes, this returns the no-call symbol.
/// # Examples
/// ```rust
/// use padded_msa::consensus::vote_column;
/// assert_eq!(vote_column(b"AC.C".iter().copied()), b'C');
/// assert_eq!(vote_column(b"TA".iter().copied()), b'A');
/// assert_eq!(vote_column(b"..".iter().copied()), b'.');
/// ```
pub fn vote_column<I: IntoIterator<Item = u8>>(symbols: I) -> u8 {
    let mut counts: HashMap<u8, usize> = Default::default();
    for symbol in symbols {
        if symbol != NO_CALL_SYMBOL {
            *counts.entry(symbol).or_default() += 1;
        }
    }

    let mut max_count = 0;
    let mut max_symbol = NO_CALL_SYMBOL;
    for (symbol, count) in counts.into_iter().sorted() {
        if count > max_count {
            max_count = count;
            max_symbol = symbol;
        }
    }
    max_symbol
}

/// Generates the consensus for an alignment, voting with the rows selected by `consensus_rows`.
/// The root (row 0) never votes.
/// # Arguments
/// * `alignment` - the built multiple alignment
/// * `consensus_rows` - which non-root rows get a vote
/// # Errors
/// * `EmptyInput` if the alignment has no rows or no columns
pub fn generate_consensus(alignment: &MultiAlignment, consensus_rows: ConsensusRows) -> Result<Consensus> {
    let num_columns = alignment.num_columns()?;
    if num_columns == 0 {
        return Err(MsaError::EmptyInput("alignment has no columns".to_string()));
    }

    let rows = alignment.rows();
    let voting_rows = match consensus_rows {
        // the reference output never counted the final row
        ConsensusRows::ExcludeLastRow => &rows[1..(rows.len() - 1).max(1)],
        ConsensusRows::AllDataRows => &rows[1..]
    };

    let winners = (0..num_columns).map(|column| {
        vote_column(voting_rows.iter().map(|row| row.padded()[column]))
    });
    let consensus = Consensus::from_column_winners(winners);

    debug!("Generated consensus of length {} from {} voting rows", consensus.sequence().len(), voting_rows.len());
    if log_enabled!(Level::Debug) {
        debug!("Alignment with padded consensus:\n{}", alignment.render(Some(consensus.padded_sequence()))?);
    }
    Ok(consensus)
}

impl MultiAlignment {
    /// Generates the consensus using the configured voting rows.
    /// # Errors
    /// * `EmptyInput` if the alignment has no columns
    pub fn consensus(&self) -> Result<Consensus> {
        generate_consensus(self, self.config().consensus_rows)
    }
}
