//! Run identifier - namespace for the temporary artifacts of one call

use std::fmt;

/// Identifier unique to one summarization call
///
/// Combines the process id, invoking user and host with a UUIDv7 nonce,
/// so concurrent workers on one machine (and concurrent calls within one
/// process) never share artifact names. The solver adapter receives it as
/// an explicit parameter instead of reading the environment itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId {
    pid: u32,
    user: String,
    host: String,
    nonce: u128,
}

impl RunId {
    /// Create a run id with a fresh UUIDv7 nonce
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptsum_domain::RunId;
    ///
    /// let a = RunId::new(42, "alice", "node-1");
    /// let b = RunId::new(42, "alice", "node-1");
    /// assert_ne!(a, b);
    /// assert!(a.to_string().starts_with("42.alice.node-1."));
    /// ```
    pub fn new(pid: u32, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self::from_parts(pid, user, host, uuid::Uuid::now_v7().as_u128())
    }

    /// Create a run id from explicit parts
    ///
    /// Primarily for tests that need a predictable artifact name.
    pub fn from_parts(pid: u32, user: impl Into<String>, host: impl Into<String>, nonce: u128) -> Self {
        Self {
            pid,
            user: sanitize(&user.into()),
            host: sanitize(&host.into()),
            nonce,
        }
    }

    /// Create a run id for the calling process
    ///
    /// User and host come from `USER` and `HOSTNAME`, falling back to
    /// `guest` and `localhost`.
    pub fn for_current_process() -> Self {
        let user = std::env::var("USER").unwrap_or_else(|_| "guest".to_string());
        let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        Self::new(std::process::id(), user, host)
    }

    /// Process id component
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Per-call nonce component
    pub fn nonce(&self) -> u128 {
        self.nonce
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.pid,
            self.user,
            self.host,
            uuid::Uuid::from_u128(self.nonce).simple()
        )
    }
}

/// Keep only characters that are safe in a file name
fn sanitize(part: &str) -> String {
    let cleaned: String = part
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}
