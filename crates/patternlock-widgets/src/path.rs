#![forbid(unsafe_code)]

//! The connecting line between selected cells.

use patternlock_core::geometry::Segment;

/// Which outcome the line is colored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineTone {
    /// Pattern in progress (or idle).
    #[default]
    Regular,
    /// Validator accepted the pattern.
    Success,
    /// Validator rejected the pattern.
    Error,
}

/// Ordered segments connecting consecutive selected cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinePath {
    segments: Vec<Segment>,
    tone: LineTone,
}

impl LinePath {
    /// Segments in selection order.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current tone.
    #[inline]
    #[must_use]
    pub const fn tone(&self) -> LineTone {
        self.tone
    }

    /// Whether no segment has been added yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn set_tone(&mut self, tone: LineTone) {
        self.tone = tone;
    }

    /// Drop every segment and return to the regular tone.
    pub(crate) fn clear(&mut self) {
        self.segments.clear();
        self.tone = LineTone::Regular;
    }
}
