//! Exit code constants for the syncsave CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid root, missing file)
//! - 2: Configuration failure (sync.json could not be read or parsed)
//! - 3: Sync failure (one or more targets failed to copy)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a path that cannot be resolved.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: sync.json unreadable or malformed.
pub const CONFIG_FAILURE: i32 = 2;

/// Sync failure: directory creation or copy failed for at least one target.
pub const SYNC_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, SYNC_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
