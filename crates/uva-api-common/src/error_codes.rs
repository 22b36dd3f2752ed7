/// Exit codes following sysexits.h.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const SOFTWARE: i32 = 70;
    pub const UNAVAILABLE: i32 = 69;
    pub const TEMPFAIL: i32 = 75;
    pub const NOPERM: i32 = 77;
    pub const CONFIG: i32 = 78;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Local configuration is unusable (bad endpoint, unreadable credentials).
    Config,
    /// A remote host could not be reached.
    Connection,
    /// The identity provider refused to issue a token.
    Authentication,
    Timeout,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Config => "config",
            ErrorCategory::Connection => "connection",
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Internal => "internal",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Config => exit_codes::CONFIG,
            ErrorCategory::Connection => exit_codes::UNAVAILABLE,
            ErrorCategory::Authentication => exit_codes::NOPERM,
            ErrorCategory::Timeout => exit_codes::TEMPFAIL,
            ErrorCategory::Internal => exit_codes::SOFTWARE,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
