//! Manual JSON import.

use tracing::info;

use crate::{error::RankingsError, model::TeamDirectory, Result};

/// Parse pasted text as `[{"id": 1, "name": "Team A", "logo": "url"}]`.
///
/// Any failure is `MalformedInput`; nothing is replaced on error.
pub fn parse_manual(input: &str) -> Result<TeamDirectory> {
    if input.trim().is_empty() {
        return Err(RankingsError::malformed("no JSON was provided"));
    }
    let directory = TeamDirectory::from_json(input)?;
    info!(teams = directory.len(), "Parsed manual team list");
    Ok(directory)
}
