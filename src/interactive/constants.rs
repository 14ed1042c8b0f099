//! Constants for the interactive TUI module

// Timing constants
/// Quiet period before a search request is sent, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Status message auto-clear delay in milliseconds (0 keeps messages until dismissed)
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 5000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of a single line text input with borders
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the program form (input, submit line, status line)
pub const PROGRAM_FORM_HEIGHT: u16 = 6;

/// Height of the client form (two inputs, submit line, status line)
pub const CLIENT_FORM_HEIGHT: u16 = 9;

/// Width share of the left column in percent
pub const LEFT_COLUMN_PERCENT: u16 = 40;

// Client table
/// Number of columns in the client table (name, email, programs, actions)
pub const CLIENT_TABLE_COLUMNS: usize = 4;

/// Placeholder shown when there are no clients to list
pub const EMPTY_CLIENTS_TEXT: &str = "No clients have been registered yet";

/// Placeholder shown when there are no programs
pub const EMPTY_PROGRAMS_TEXT: &str = "No programs yet";

/// Programs cell text for a client without enrollments
pub const NO_PROGRAMS_TEXT: &str = "None";

// Dialogs
/// Maximum width for help and confirm dialogs
pub const DIALOG_MAX_WIDTH: u16 = 70;
