
use itertools::Itertools;
use simple_error::{bail, SimpleError};

/// A single column-level operation describing how a row relates to the root.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EditOp {
    /// Row and root both have a base in this column
    Match,
    /// The root has a base that the row does not; the row renders a gap
    Insertion,
    /// The row has a base that the root does not; every row that is not also deleting renders a gap
    Deletion,
    /// The row does not cover this column, also used as the sentinel once the ops are exhausted
    Softclip
}

impl EditOp {
    /// Returns the single-byte symbol for this operation.
    pub fn symbol(&self) -> u8 {
        match self {
            EditOp::Match => b'M',
            EditOp::Insertion => b'I',
            EditOp::Deletion => b'D',
            EditOp::Softclip => b'S'
        }
    }

    /// Returns true if this operation emits a base from the row sequence.
    pub fn consumes_base(&self) -> bool {
        matches!(self, EditOp::Match | EditOp::Deletion)
    }
}

impl TryFrom<u8> for EditOp {
    type Error = SimpleError;

    fn try_from(symbol: u8) -> Result<Self, Self::Error> {
        let op = match symbol {
            b'M' | b'=' | b'X' => EditOp::Match,
            b'I' => EditOp::Insertion,
            b'D' => EditOp::Deletion,
            b'S' => EditOp::Softclip,
            _ => bail!("Unknown operation symbol: {:?}", symbol as char)
        };
        Ok(op)
    }
}

/// Parses an already expanded operation string, one symbol per alignment column.
/// # Arguments
/// * `ops` - the expanded string, e.g. `b"MMIMD"`
/// # Errors
/// * if any symbol is outside of the `M`, `I`, `D`, `S` alphabet (`=` and `X` are read as `M`)
/// # Examples
/// ```rust
/// use padded_msa::sequence_alignment::{parse_expanded_ops, EditOp};
/// let ops = parse_expanded_ops(b"MIDS").unwrap();
/// assert_eq!(ops, vec![EditOp::Match, EditOp::Insertion, EditOp::Deletion, EditOp::Softclip]);
/// assert!(parse_expanded_ops(b"MQ").is_err());
/// ```
pub fn parse_expanded_ops(ops: &[u8]) -> Result<Vec<EditOp>, SimpleError> {
    ops.iter()
        .map(|&s| EditOp::try_from(s))
        .collect()
}

/// Expands a run-length CIGAR string into one operation per alignment column.
/// A missing run length is treated as 1, so `"M2D"` is the same as `"1M2D"`.
/// # Arguments
/// * `cigar` - the compact CIGAR, e.g. `"3M1I2M"`
/// # Errors
/// * if a symbol is unknown, a run length is zero, or the string ends in a dangling number
/// # Examples
/// ```rust
/// use padded_msa::sequence_alignment::{expand_cigar, EditOp};
/// let ops = expand_cigar("2M1D").unwrap();
/// assert_eq!(ops, vec![EditOp::Match, EditOp::Match, EditOp::Deletion]);
/// ```
pub fn expand_cigar(cigar: &str) -> Result<Vec<EditOp>, SimpleError> {
    let mut expanded = vec![];
    let mut run_length: Option<usize> = None;
    for c in cigar.bytes() {
        if c.is_ascii_digit() {
            let digit = (c - b'0') as usize;
            let current = run_length.unwrap_or(0);
            run_length = match current.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => Some(v),
                None => bail!("Run length overflow in CIGAR {:?}", cigar)
            };
        } else {
            let op = EditOp::try_from(c)?;
            let count = run_length.unwrap_or(1);
            if count == 0 {
                bail!("Zero-length run in CIGAR {:?}", cigar);
            }
            expanded.extend(std::iter::repeat(op).take(count));
            run_length = None;
        }
    }

    if run_length.is_some() {
        bail!("CIGAR {:?} ends with a run length but no operation", cigar);
    }
    Ok(expanded)
}

/// Collapses expanded operations back into a run-length CIGAR string.
/// # Examples
/// ```rust
/// use padded_msa::sequence_alignment::{compact_ops, expand_cigar};
/// let ops = expand_cigar("3M1I2M2S").unwrap();
/// assert_eq!(compact_ops(&ops), "3M1I2M2S");
/// ```
pub fn compact_ops(ops: &[EditOp]) -> String {
    ops.iter()
        .dedup_with_count()
        .map(|(count, op)| format!("{}{}", count, op.symbol() as char))
        .collect()
}

/// Renders expanded operations as their symbol string, e.g. `"MMIM"`.
pub fn ops_to_string(ops: &[EditOp]) -> String {
    ops.iter().map(|op| op.symbol() as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_cigar() {
        let ops = expand_cigar("2S3M1I1M1D").unwrap();
        assert_eq!(ops_to_string(&ops), "SSMMMIMD");

        // implied run lengths and multi-digit runs
        assert_eq!(ops_to_string(&expand_cigar("M12M").unwrap()), "M".repeat(13));
        assert_eq!(ops_to_string(&expand_cigar("2=1X").unwrap()), "MMM");
        assert!(expand_cigar("").unwrap().is_empty());
    }

    #[test]
    fn test_expand_cigar_errors() {
        let err = expand_cigar("3M2").unwrap_err();
        assert_eq!(err.to_string(), "CIGAR \"3M2\" ends with a run length but no operation");
        assert!(expand_cigar("0M").is_err());
        assert!(expand_cigar("3N").is_err());
        assert!(expand_cigar("99999999999999999999999M").is_err());
    }

    #[test]
    fn test_compact_ops() {
        assert_eq!(compact_ops(&[]), "");
        let ops = parse_expanded_ops(b"SMMIIIMD").unwrap();
        assert_eq!(compact_ops(&ops), "1S2M3I1M1D");
    }

    #[test]
    fn test_consumes_base() {
        assert!(EditOp::Match.consumes_base());
        assert!(EditOp::Deletion.consumes_base());
        assert!(!EditOp::Insertion.consumes_base());
        assert!(!EditOp::Softclip.consumes_base());
    }
}
