//! Text segmentation strategies
//!
//! A [`Segmenter`] splits text into the atomic elements the chunker strides
//! over. The strategy is resolved once at construction, so callers (and
//! tests) always know which semantics they get instead of depending on an
//! ambient capability probe.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Unit of segmentation, fixed when the [`Segmenter`] is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationMode {
    /// Extended grapheme clusters (UAX #29): one element per user-perceived
    /// character. Joined emoji, flag sequences and combining marks stay
    /// atomic.
    #[default]
    GraphemeClusters,

    /// One element per Unicode scalar value.
    ///
    /// Degraded mode: sequences a grapheme algorithm would keep together
    /// (ZWJ-joined emoji, regional-indicator flags, combining marks) are
    /// split into their constituent code points.
    CodePoints,
}

/// Splits text into an ordered sequence of atomic text elements
///
/// The default segmenter uses extended grapheme clusters.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    mode: SegmentationMode,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentationMode::default())
    }
}

impl Segmenter {
    /// Create a segmenter with an explicit mode
    pub fn new(mode: SegmentationMode) -> Self {
        debug!(?mode, "selected segmentation strategy");
        Self { mode }
    }

    /// The mode this segmenter was built with
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Segment `text` into elements whose in-order concatenation is exactly
    /// `text`. An empty string yields an empty sequence.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.mode {
            SegmentationMode::GraphemeClusters => text.graphemes(true).collect(),
            SegmentationMode::CodePoints => text
                .char_indices()
                .map(|(start, c)| &text[start..start + c.len_utf8()])
                .collect(),
        }
    }
}
