//! Excision of the marker-delimited override block from a vendor
//! controller file.
//!
//! Earlier releases injected a block of code into the host platform's
//! admin order controller, fenced by two sentinel comments. The upgrade
//! removes that block. Excision is line-based: the lines carrying the
//! markers and everything between them are dropped, so the exact column
//! position of a marker does not matter.

/// Sentinel comment opening the injected block.
pub const START_MARKER: &str = "/** OLD PART START */";

/// Sentinel comment closing the injected block.
pub const END_MARKER: &str = "/** OLD PART END */";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("start marker `{0}` not found")]
    MissingStartMarker(&'static str),

    #[error("end marker `{0}` not found")]
    MissingEndMarker(&'static str),

    #[error("end marker appears before start marker")]
    MarkersOutOfOrder,
}

/// Remove the block fenced by [`START_MARKER`] and [`END_MARKER`] from
/// `contents`, returning the patched text.
///
/// Both marker lines are removed along with the block. Returns an error
/// when either marker is missing rather than silently rewriting the file.
pub fn strip_marked_block(contents: &str) -> Result<String, PatchError> {
    let start = contents
        .find(START_MARKER)
        .ok_or(PatchError::MissingStartMarker(START_MARKER))?;
    let end = contents
        .find(END_MARKER)
        .ok_or(PatchError::MissingEndMarker(END_MARKER))?;
    if end < start {
        return Err(PatchError::MarkersOutOfOrder);
    }

    // Widen to whole lines: back to the previous newline, forward past the
    // newline following the end marker.
    let cut_from = contents[..start].rfind('\n').map_or(0, |i| i + 1);
    let after_end = end + END_MARKER.len();
    let cut_to = contents[after_end..]
        .find('\n')
        .map_or(contents.len(), |i| after_end + i + 1);

    let mut patched = String::with_capacity(contents.len() - (cut_to - cut_from));
    patched.push_str(&contents[..cut_from]);
    patched.push_str(&contents[cut_to..]);
    Ok(patched)
}
