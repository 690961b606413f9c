//! Inbound action requests.

/// A single operator-issued instruction naming a server and an action.
///
/// The routing collaborator has already authenticated `requester` and
/// `channel`; the action token is still raw and validated by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Identity of the operator who issued the request.
    pub requester: String,
    /// Registry key of the target server.
    pub server: String,
    /// Raw action token, e.g. `down`.
    pub action: String,
    /// Origination context (channel or session identifier).
    pub channel: String,
}

impl ActionRequest {
    #[must_use]
    pub fn new(
        requester: impl Into<String>,
        server: impl Into<String>,
        action: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            requester: requester.into(),
            server: server.into(),
            action: action.into(),
            channel: channel.into(),
        }
    }
}
