//! Constants for the interactive directory client.
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and make the codebase more self-documenting.

// Timing constants
/// Debounce window applied to search input, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 300;

/// Status message auto-clear delay in milliseconds.
pub const STATUS_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds.
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Search constants
/// Minimum non-empty search term length before a fetch is issued.
/// Shorter terms keep the current display state untouched.
pub const MIN_SEARCH_TERM_LEN: usize = 2;

/// Records requested per fetch. The client never pages past the first page.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// UI Layout constants
/// Height of the search bar component.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the filter bar component.
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation.
pub const PAGE_SIZE: usize = 10;

/// Maximum width for the help dialog.
pub const HELP_DIALOG_MAX_WIDTH: u16 = 60;
