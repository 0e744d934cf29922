use thiserror::Error;

use crate::pipeline::select::SCHEME_LEN;

/// Failures of the extraction/selection core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The image did not populate enough color buckets.
    #[error(
        "this image is not appropriate for generating a color scheme: \
         found {found} distinct color regions, need at least {}",
        SCHEME_LEN
    )]
    InsufficientPalette {
        /// Number of palette colors actually extracted.
        found: usize,
    },

    /// Every candidate for a slot was already taken by an earlier slot.
    /// Not fatal: the slot keeps a zero-valued placeholder.
    #[error("no unused palette color left for scheme slot {slot}")]
    ExhaustedCandidates {
        /// Index into the scheme template.
        slot: usize,
    },
}
