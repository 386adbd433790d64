
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

use crate::align_row::AlignRow;
use crate::sequence_alignment::EditOp;

/// Creates a test set of a root and rows aligned to it that we can verify is working.
/// Each row covers a random window of the root (the rest is softclipped or left off the end) and carries random errors.
/// The returned rows have sequences that exactly match what their operations consume.
/// # Arguments
/// * `alphabet_size` - the length of the alphabet, e.g. for DNA it's 4; symbols are `A`, `B`, `C`, ...
/// * `root_len` - the length of the root sequence
/// * `num_rows` - the number of rows to generate from the root
/// * `error_rate` - overall error rate, assumes mismatch, insertion, and deletion are equally likely sub-components of this error rate
pub fn generate_test(alphabet_size: u8, root_len: usize, num_rows: usize, error_rate: f64) -> (Vec<u8>, Vec<AlignRow>) {
    assert!(alphabet_size > 1 && alphabet_size <= 26);
    assert!((0.0..=1.0).contains(&error_rate));

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let base_distribution = Uniform::new(0, alphabet_size);
    let basem1_distribution = Uniform::new(0, alphabet_size-1);
    let error_distribution = Uniform::new(0.0, 1.0);
    let error_type_distribution = Uniform::new(0, 3);
    let clip_distribution = Uniform::new_inclusive(0, root_len / 4);

    let root: Vec<u8> = (0..root_len)
        .map(|_i| b'A' + rng.sample(base_distribution))
        .collect();

    let rows: Vec<AlignRow> = (0..num_rows)
        .map(|i| {
            let start = rng.sample(clip_distribution);
            let end = root_len - rng.sample(clip_distribution);

            let mut seq = vec![];
            let mut ops = vec![EditOp::Softclip; start];
            let mut con_index = start;
            while con_index < end {
                let c = root[con_index] - b'A';
                let is_error = rng.sample(error_distribution) < error_rate;
                if is_error {
                    let error_type = rng.sample(error_type_distribution);
                    match error_type {
                        0 => {
                            // substitution
                            let sub_offset = 1 + rng.sample(basem1_distribution);
                            let alt_c = (c + sub_offset) % alphabet_size;
                            seq.push(b'A' + alt_c);
                            ops.push(EditOp::Match);
                            con_index += 1;
                        },
                        1 => {
                            // root base missing from the row
                            ops.push(EditOp::Insertion);
                            con_index += 1;
                        },
                        2 => {
                            // extra base in the row
                            seq.push(b'A' + rng.sample(base_distribution));
                            ops.push(EditOp::Deletion);
                        },
                        _ => panic!("no impl")
                    }
                } else {
                    seq.push(b'A' + c);
                    ops.push(EditOp::Match);
                    con_index += 1;
                }
            }

            AlignRow::new(&seq, ops, start as i64, &format!("row_{i}"))
        })
        .collect();

    (root, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_no_errors() {
        let (root, rows) = generate_test(4, 100, 5, 0.0);
        assert_eq!(root.len(), 100);
        assert!(root.iter().all(|b| (b'A'..b'E').contains(b)));
        assert_eq!(rows.len(), 5);
        for row in rows.iter() {
            // without errors, the row is exactly the covered window of the root
            let start = row.position() as usize;
            assert!(row.expanded_ops()[..start].iter().all(|&op| op == EditOp::Softclip));
            assert_eq!(row.sequence(), &root[start..(start + row.sequence().len())]);
            assert_eq!(row.required_bases(), row.sequence().len());
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let first = generate_test(4, 50, 3, 0.1);
        let second = generate_test(4, 50, 3, 0.1);
        assert_eq!(first, second);
        assert!(first.1.iter().all(|row| row.validate().is_ok()));
    }
}
