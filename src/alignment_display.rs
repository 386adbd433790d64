
use itertools::Itertools;
use std::fmt;
use std::fmt::Write;

use crate::msa_error::{MsaError, Result};
use crate::multi_alignment::MultiAlignment;

/// Label used for the consensus line in each block
const CONSENSUS_LABEL: &str = "C";

/// Writes the alignment in blocks of `column_width` columns.
/// Rows are ordered by anchor position (stable, so ties keep their input order) and each line is `index\tpadded\tname`.
/// If a consensus is provided, each block starts with a `C\t...` line for the same columns.
fn write_blocks<W: Write>(
    out: &mut W, alignment: &MultiAlignment, consensus: Option<&[u8]>, column_width: usize
) -> fmt::Result {
    let sorted_rows = alignment.rows().iter()
        .sorted_by_key(|row| row.position())
        .collect::<Vec<_>>();
    let num_columns = sorted_rows.first().map(|row| row.padded().len()).unwrap_or(0);

    // a zero width would never advance
    let column_width = column_width.max(1);
    for block_start in (0..num_columns).step_by(column_width) {
        if let Some(consensus) = consensus {
            if block_start < consensus.len() {
                let block_end = consensus.len().min(block_start + column_width);
                writeln!(out, "{}\t{}", CONSENSUS_LABEL, String::from_utf8_lossy(&consensus[block_start..block_end]))?;
            } else {
                writeln!(out, "{}", CONSENSUS_LABEL)?;
            }
        }

        for (sorted_index, row) in sorted_rows.iter().enumerate() {
            let padded = row.padded();
            let block_end = padded.len().min(block_start + column_width);
            let block = padded.get(block_start..block_end).unwrap_or(&[]);
            writeln!(out, "{}\t{}\t{}", sorted_index, String::from_utf8_lossy(block), row.name())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Borrowed view of an alignment with an optional consensus line, rendered through `Display`
struct AlignmentBlocks<'a> {
    alignment: &'a MultiAlignment,
    consensus: Option<&'a [u8]>
}

impl fmt::Display for AlignmentBlocks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, self.alignment, self.consensus, self.alignment.config().column_width)
    }
}

impl MultiAlignment {
    /// Renders the alignment as fixed-width text blocks for inspection, using the configured column width.
    /// # Arguments
    /// * `consensus` - optional padded consensus to show above each block
    /// # Errors
    /// * `EmptyInput` if the alignment has no columns
    pub fn render(&self, consensus: Option<&[u8]>) -> Result<String> {
        if self.num_columns()? == 0 {
            return Err(MsaError::EmptyInput("cannot render an alignment with no columns".to_string()));
        }

        let blocks = AlignmentBlocks {
            alignment: self,
            consensus
        };
        Ok(blocks.to_string())
    }
}

impl fmt::Display for MultiAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, self, None, self.config().column_width)
    }
}

#[cfg(test)]
mod tests {
    use crate::align_row::AlignRow;
    use crate::msa_config::MsaConfigBuilder;

    use super::*;

    fn build_alignment(column_width: usize) -> MultiAlignment {
        let rows = vec![
            AlignRow::from_op_string(b"CT", b"SSMM", 5, "r1").unwrap(),
            AlignRow::from_op_string(b"GACT", b"MMMM", 2, "r2").unwrap(),
            AlignRow::from_op_string(b"GAT", b"MMIM", 2, "r3").unwrap()
        ];
        let config = MsaConfigBuilder::default()
            .column_width(column_width)
            .build().unwrap();
        MultiAlignment::with_config(b"GACT", rows, config).unwrap()
    }

    #[test]
    fn test_render_sorted() {
        let msa = build_alignment(140);
        // r2 and r3 tie on position and keep their input order
        let expected = "0\tGACT\troot\n1\tGACT\tr2\n2\tGA-T\tr3\n3\t..CT\tr1\n\n";
        assert_eq!(msa.render(None).unwrap(), expected);
        assert_eq!(msa.to_string(), expected);

        // rendering never changes the row order of the alignment itself
        assert_eq!(msa.get_idx_by_name("r1").unwrap(), 1);
    }

    #[test]
    fn test_render_blocks_with_consensus() {
        let msa = build_alignment(3);
        let rendered = msa.render(Some(&b"GAC"[..])).unwrap();
        let expected = [
            "C\tGAC",
            "0\tGAC\troot",
            "1\tGAC\tr2",
            "2\tGA-\tr3",
            "3\t..C\tr1",
            "",
            "C",
            "0\tT\troot",
            "1\tT\tr2",
            "2\tT\tr3",
            "3\tT\tr1",
            "",
            ""
        ].join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty() {
        let msa = MultiAlignment::new(b"", vec![]).unwrap();
        assert!(matches!(msa.render(None), Err(MsaError::EmptyInput(_))));
        assert_eq!(msa.to_string(), "");
    }
}
