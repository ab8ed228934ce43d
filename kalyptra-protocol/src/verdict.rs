//! Reply classification
//!
//! The companion answers a query with a byte sequence whose first byte
//! carries the verdict. Anything unrecognized is `Unknown` rather than
//! an error: a garbled reply and a silent line both mean "no state
//! change this cycle" to the callers.

/// Affirmative reply byte
pub const AFFIRM_BYTE: u8 = b'Y';

/// Negative reply byte
pub const DENY_BYTE: u8 = b'N';

/// Classified outcome of one token exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Companion answered `Y`
    Affirm,
    /// Companion answered `N`
    Deny,
    /// Companion answered something else (garbled or not updated)
    Unknown,
    /// Nothing arrived before the reply deadline
    Timeout,
}

impl Verdict {
    /// Classify a reply from its first byte
    ///
    /// An empty reply is `Timeout`; the transport only produces one
    /// when its deadline expires, but classifying it here keeps the
    /// mapping total.
    pub fn classify(reply: &[u8]) -> Verdict {
        match reply.first() {
            Some(&AFFIRM_BYTE) => Verdict::Affirm,
            Some(&DENY_BYTE) => Verdict::Deny,
            Some(_) => Verdict::Unknown,
            None => Verdict::Timeout,
        }
    }

    /// True for `Affirm`
    pub fn is_affirm(self) -> bool {
        matches!(self, Verdict::Affirm)
    }
}
