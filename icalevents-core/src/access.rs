//! Process-wide calendar authorization cache.

use std::sync::OnceLock;

/// Whether the host has granted access to calendar events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Uninitialized,
    Granted,
    Denied,
}

/// Caches the outcome of the authorization handshake.
///
/// The first caller of [`AccessGate::ensure`] runs the handshake; everyone
/// else observes its result. The state is never reset, so a denial sticks
/// for the lifetime of the gate.
#[derive(Debug, Default)]
pub struct AccessGate {
    state: OnceLock<AccessState>,
}

impl AccessGate {
    pub const fn new() -> Self {
        AccessGate {
            state: OnceLock::new(),
        }
    }

    /// The gate shared by every query in this process.
    pub fn process() -> &'static AccessGate {
        static PROCESS_GATE: AccessGate = AccessGate::new();
        &PROCESS_GATE
    }

    pub fn state(&self) -> AccessState {
        self.state
            .get()
            .copied()
            .unwrap_or(AccessState::Uninitialized)
    }

    /// Run `request` if no decision is cached yet and report whether access is granted.
    ///
    /// `request` blocks until the host answers and returns `true` when granted.
    pub fn ensure(&self, request: impl FnOnce() -> bool) -> AccessState {
        *self.state.get_or_init(|| {
            tracing::info!("requesting calendar access");
            if request() {
                tracing::info!("calendar access granted");
                AccessState::Granted
            } else {
                tracing::warn!("calendar access denied");
                AccessState::Denied
            }
        })
    }
}
