
use crate::msa_error::{MsaError, Result};
use crate::sequence_alignment::{expand_cigar, parse_expanded_ops, EditOp};

/// The name given to the synthetic root row
pub const ROOT_NAME: &str = "root";

/// One row of the multiple alignment: an input sequence and how it aligns to the root.
/// Everything except `padded` is fixed at creation; `padded` is filled in by the alignment builder.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignRow {
    /// The unpadded bases of this row
    sequence: Vec<u8>,
    /// One operation per alignment column relative to the root
    expanded_ops: Vec<EditOp>,
    /// Anchor position, only used for display ordering
    position: i64,
    /// Display name, expected to be unique across rows
    name: String,
    /// The padded output row, built column by column
    padded: Vec<u8>
}

impl AlignRow {
    /// Constructor
    /// # Arguments
    /// * `sequence` - the unpadded bases
    /// * `expanded_ops` - one operation per alignment column
    /// * `position` - display-only anchor position
    /// * `name` - the display name
    pub fn new(sequence: &[u8], expanded_ops: Vec<EditOp>, position: i64, name: &str) -> AlignRow {
        AlignRow {
            sequence: sequence.to_vec(),
            expanded_ops,
            position,
            name: name.to_string(),
            padded: vec![]
        }
    }

    /// Creates a row from an expanded operation string such as `b"MMIM"`.
    /// # Errors
    /// * if the operation string has symbols outside the operation alphabet
    pub fn from_op_string(sequence: &[u8], ops: &[u8], position: i64, name: &str) -> Result<AlignRow> {
        let expanded_ops = parse_expanded_ops(ops)?;
        Ok(AlignRow::new(sequence, expanded_ops, position, name))
    }

    /// Creates a row from a run-length CIGAR such as `"2M1I1M"`.
    /// # Errors
    /// * if the CIGAR cannot be expanded
    pub fn from_cigar(sequence: &[u8], cigar: &str, position: i64, name: &str) -> Result<AlignRow> {
        let expanded_ops = expand_cigar(cigar)?;
        Ok(AlignRow::new(sequence, expanded_ops, position, name))
    }

    /// Creates the synthetic root row, which matches itself at every base.
    pub fn root(sequence: &[u8]) -> AlignRow {
        AlignRow::new(sequence, vec![EditOp::Match; sequence.len()], 0, ROOT_NAME)
    }

    /// Returns the number of bases the operations will pull from the sequence
    pub fn required_bases(&self) -> usize {
        self.expanded_ops.iter()
            .filter(|op| op.consumes_base())
            .count()
    }

    /// Verifies that the sequence is long enough for the operations.
    /// # Errors
    /// * `InsufficientBases` if the operations consume more bases than are available
    pub fn validate(&self) -> Result<()> {
        let required = self.required_bases();
        if required > self.sequence.len() {
            return Err(MsaError::InsufficientBases {
                name: self.name.clone(),
                required,
                available: self.sequence.len()
            });
        }
        Ok(())
    }

    /// Appends one output symbol; only the alignment builder may call this, once per row per column.
    pub(crate) fn push_padded(&mut self, symbol: u8) {
        self.padded.push(symbol);
    }

    // Getters
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn expanded_ops(&self) -> &[EditOp] {
        &self.expanded_ops
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn padded(&self) -> &[u8] {
        &self.padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_row() {
        let root = AlignRow::root(b"GACT");
        assert_eq!(root.name(), ROOT_NAME);
        assert_eq!(root.position(), 0);
        assert_eq!(root.expanded_ops(), &[EditOp::Match; 4]);
        assert!(root.padded().is_empty());
    }

    #[test]
    fn test_required_bases() {
        // M and D emit bases, I and S do not
        let row = AlignRow::from_op_string(b"GAACT", b"SMMDIMM", 3, "r1").unwrap();
        assert_eq!(row.required_bases(), 5);
        assert!(row.validate().is_ok());

        let short_row = AlignRow::from_op_string(b"GA", b"MMM", 0, "r2").unwrap();
        let err = short_row.validate().unwrap_err();
        assert!(matches!(err, MsaError::InsufficientBases { required: 3, available: 2, .. }));
    }

    #[test]
    fn test_from_cigar() {
        let from_cigar = AlignRow::from_cigar(b"GAT", "2M1I1M", 7, "r1").unwrap();
        let from_ops = AlignRow::from_op_string(b"GAT", b"MMIM", 7, "r1").unwrap();
        assert_eq!(from_cigar, from_ops);

        let err = AlignRow::from_op_string(b"GAT", b"MMQM", 0, "bad").unwrap_err();
        assert!(matches!(err, MsaError::InvalidOps(_)));
    }
}
