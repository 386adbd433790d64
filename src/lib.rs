/*!
# padded_msa
This library builds a padded multiple sequence alignment from rows that are each pairwise aligned to a shared root sequence, and derives a plurality-vote consensus from it.

Key benefits:
* Synchronizes any number of rows column by column, so every padded row has the same length
* Gaps (`-`) and uncovered columns (`.`) are kept distinct in the padded output
* Consensus ties are resolved by symbol order, so results do not depend on row order

Behavior notes:
* By default, the last data row does not vote in the consensus; see `msa_config::ConsensusRows` to include it
* A row base marked as an insertion relative to the root is not shown in the padded output, the original sequence still has it

# Example usage
```rust
use padded_msa::align_row::AlignRow;
use padded_msa::multi_alignment::MultiAlignment;

let rows = vec![
    AlignRow::from_cigar(b"ACCGT", "2M1D2M", 0, "read_1").unwrap(),
    AlignRow::from_cigar(b"ACCGT", "2M1D2M", 0, "read_2").unwrap(),
    AlignRow::from_cigar(b"ACGT", "4M", 0, "read_3").unwrap(),
];

let msa = MultiAlignment::new(b"ACGT", rows).unwrap();
assert_eq!(msa.num_columns().unwrap(), 5);
assert_eq!(msa.padded_row(0).unwrap(), b"AC-GT"); // root
assert_eq!(msa.padded_row(3).unwrap(), b"AC-GT");

// read_3 is the last row, so only read_1 and read_2 vote
let consensus = msa.consensus().unwrap();
assert_eq!(consensus.padded_sequence(), b"ACCGT");
assert_eq!(consensus.sequence(), b"ACCGT");
```
*/

/// Fixed-width text rendering of an alignment
pub mod alignment_display;
/// A single aligned row and its padded output
pub mod align_row;
/// Plurality-vote consensus over the alignment columns
pub mod consensus;
/// Utility for generating examples
pub mod example_gen;
/// Configuration for MultiAlignment
pub mod msa_config;
/// Error type shared by the alignment components
pub mod msa_error;
/// Main functionality for building and querying the padded multiple alignment
pub mod multi_alignment;
/// Basic pair-wise alignment operations and CIGAR utilities
pub mod sequence_alignment;
