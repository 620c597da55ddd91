//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Run-to-completion Semantics
///
/// Every evaluation finishes before `execute` returns, so there is no
/// in-progress state:
/// - Conditions answer immediately (e.g., "Is the player visible?")
/// - Actions execute atomically (e.g., "Attack the player")
///
/// `Status` is interchangeable with `bool`: `Success` is `true`, `Failure`
/// is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action was carried out.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Lowercase label for log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(succeeded: bool) -> Self {
        if succeeded {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<Status> for bool {
    #[inline]
    fn from(status: Status) -> Self {
        status.is_success()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
