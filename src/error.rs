use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Domain failures surfaced to the presentation layer.
///
/// Every failure is resolved at the call site and rendered as an inline
/// message; none is retried and none aborts the process. The `Display`
/// strings are the exact texts the screens show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bad credential pair on login.
    #[error("Invalid username or password.")]
    AuthenticationFailed,
    /// Signup collision on the (case-sensitive) username.
    #[error("Username already exists. Please choose another.")]
    UsernameTaken,
    /// Ballot creation attempted without an administrator identity.
    #[error("Only administrators can create ballots.")]
    NotAuthorized,
    /// Ballot creation input rejected before any mutation.
    #[error("Invalid ballot: {0}")]
    Validation(String),
    /// Vote cast with no current identity.
    #[error("User not logged in.")]
    NotLoggedIn,
    /// A vote by this voter already exists for this ballot.
    #[error("You have already voted in this election.")]
    AlreadyVoted,
    /// Unknown ballot, or a candidate not on the ballot.
    #[error("Invalid ballot or candidate.")]
    InvalidSelection,
    /// The ballot is not accepting votes (only when enforcement is on).
    #[error("This ballot is not currently active.")]
    BallotClosed,
}
