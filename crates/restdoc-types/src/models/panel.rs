//! Response panel state machine.

use serde::{Deserialize, Serialize};

/// What the panel is showing for the current invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// `runRequest` invoked
    Started,
    /// 200 or 204
    Succeeded,
    /// Any rejection, status or transport
    Failed,
}

impl PanelState {
    /// Apply `event`, or `None` if it does not apply in this state.
    ///
    /// A new invocation is accepted from every state, including `Loading`
    /// (the earlier request is superseded). Completions only land on `Loading`.
    pub fn apply(self, event: PanelEvent) -> Option<PanelState> {
        match (self, event) {
            (_, PanelEvent::Started) => Some(Self::Loading),
            (Self::Loading, PanelEvent::Succeeded) => Some(Self::Success),
            (Self::Loading, PanelEvent::Failed) => Some(Self::Error),
            _ => None,
        }
    }

    pub fn spinner_visible(self) -> bool {
        self == Self::Loading
    }

    pub fn panel_visible(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

/// Identifies one `runRequest` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Panel state plus the invocation that currently owns it.
///
/// Only the latest ticket may complete; older ones were superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelTracker {
    state: PanelState,
    latest: u64,
}

impl PanelTracker {
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Enter `Loading` for a new invocation, superseding any earlier one.
    pub fn start(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        self.state = self.state.apply(PanelEvent::Started).unwrap_or(PanelState::Loading);
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Land a completion. `None` when the ticket was superseded or already completed.
    pub fn complete(&mut self, ticket: RequestTicket, event: PanelEvent) -> Option<PanelState> {
        if !self.is_current(ticket) {
            return None;
        }
        let next = self.state.apply(event)?;
        self.state = next;
        Some(next)
    }
}
