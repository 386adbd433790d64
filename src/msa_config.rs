
/*!
Contains configuration information for building and reporting a multiple alignment.
Typical usage is to the use the builder to construct the config, e.g.
```
use padded_msa::msa_config::{ConsensusRows, MsaConfig, MsaConfigBuilder};
let config: MsaConfig = MsaConfigBuilder::default()
    .column_width(80)
    .consensus_rows(ConsensusRows::AllDataRows)
    .build()
    .unwrap();
```
*/

/// Controls which rows get a vote during consensus generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ConsensusRows {
    /// Votes over every non-root row except the last one, matching the reference output
    #[default]
    ExcludeLastRow,
    /// Votes over every non-root row; this deviates from the reference output
    AllDataRows
}

/// Contains configuration information for the multiple alignment.
#[derive(derive_builder::Builder, Clone, Debug)]
#[builder(default)]
pub struct MsaConfig {
    /// Number of columns per block when rendering the alignment
    pub column_width: usize,
    /// Which rows participate in the consensus vote
    pub consensus_rows: ConsensusRows
}

impl Default for MsaConfig {
    fn default() -> Self {
        Self {
            // fits on a wide terminal with the row index and name
            column_width: 140,
            consensus_rows: ConsensusRows::ExcludeLastRow
        }
    }
}
