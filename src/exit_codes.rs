//! Exit code constants for the git-precommit-checks hook.
//!
//! - 0: Success (no blocking match; warnings may have been printed)
//! - 1: Checks failed (at least one blocking rule matched)
//! - 2: User error (bad invocation, explicit config path missing)
//! - 3: Git operation failure (staged files or diff could not be read)
//! - 65: Data error (malformed configuration or invalid rule pattern)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// At least one blocking rule matched a staged addition.
pub const CHECKS_FAILED: i32 = 1;

/// User error: bad arguments or a config path that does not exist.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: listing staged files or fetching a diff failed.
pub const GIT_FAILURE: i32 = 3;

/// Data error (`EX_DATAERR`): the configuration could not be used as given.
pub const DATA_ERROR: i32 = 65;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, CHECKS_FAILED, USER_ERROR, GIT_FAILURE, DATA_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn data_error_matches_sysexits() {
        assert_eq!(DATA_ERROR, 65);
    }
}
