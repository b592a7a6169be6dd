//! CLI Exit Code Registry
//!
//! Single source of truth for `salesboard` exit codes. Scripts rely on them.
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (unspecified)              |
//! | 2     | Universal | Usage error, unreadable/unwritable file  |
//! | 60-69 | analyze   | Dataset, policy and integrity failures   |

use salesboard_analytics::{AnalyzeError, ErrorKind};

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, file cannot be read or written.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Analyze (60-69)
// =============================================================================

/// Dataset is malformed: a collection is missing, not an array, empty,
/// has duplicate keys, or an element does not parse.
pub const EXIT_ANALYZE_INPUT: u8 = 60;

/// Policy file is malformed or a strategy is missing.
pub const EXIT_ANALYZE_CONFIG: u8 = 61;

/// A purchase record references an unknown seller or product.
pub const EXIT_ANALYZE_INTEGRITY: u8 = 62;

/// Map an engine error to its exit code.
pub fn analyze_exit_code(err: &AnalyzeError) -> u8 {
    match err.kind() {
        ErrorKind::InputShape => EXIT_ANALYZE_INPUT,
        ErrorKind::Config => EXIT_ANALYZE_CONFIG,
        ErrorKind::ReferentialIntegrity => EXIT_ANALYZE_INTEGRITY,
    }
}
