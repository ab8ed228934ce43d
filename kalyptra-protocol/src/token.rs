//! Outbound sentinel tokens
//!
//! Token lengths match the reference companion firmware and are part
//! of the wire contract - do not "tidy" them to a common length.

/// A request token sent to the companion module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandToken {
    /// Ask the companion to consult the weather API for rain
    QueryRain,
    /// Ask the companion to poll the dashboard for an open/close command
    QueryDashboard,
    /// Tell the companion the cover just opened (dashboard counter);
    /// fire-and-forget, no reply is expected
    NotifyOpened,
}

impl CommandToken {
    /// Wire bytes for this token
    pub const fn wire_bytes(self) -> &'static [u8] {
        match self {
            CommandToken::QueryRain => b"RRRRRRRRRRRR",
            CommandToken::QueryDashboard => b"DDDDDDDDDD",
            CommandToken::NotifyOpened => b"TTTTTTTTTTT",
        }
    }

    /// The repeated sentinel letter for this token
    pub const fn sentinel(self) -> u8 {
        match self {
            CommandToken::QueryRain => b'R',
            CommandToken::QueryDashboard => b'D',
            CommandToken::NotifyOpened => b'T',
        }
    }

    /// Whether the companion is expected to answer this token
    pub const fn expects_reply(self) -> bool {
        !matches!(self, CommandToken::NotifyOpened)
    }
}
