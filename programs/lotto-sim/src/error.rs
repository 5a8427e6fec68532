use anchor_lang::prelude::*;
use anchor_lang::error::Error;

#[error_code]
pub enum LottoError {
    #[msg("Could not parse numbers")]
    BaseNumberNotNumeric,

    #[msg("Base numbers must be between 1 and 40")]
    BaseNumberOutOfRange,

    #[msg("No valid numbers found")]
    NoBaseNumbers,

    #[msg("SYSTEM wheels are available for 7 to 11 numbers")]
    InvalidWheelSize,

    #[msg("Speed must be between 1 and 10000 draws per second")]
    InvalidRate,

    #[msg("Quick pick count must be between 1 and 1000")]
    InvalidQuickPickCount,

    #[msg("Unknown command")]
    UnknownCommand,

    #[msg("Could not read the ticket file")]
    TicketFileUnreadable,
}

/// The variant name of a simulator error, e.g. `"InvalidRate"`.
pub fn error_name(err: &Error) -> Option<&str> {
    match err {
        Error::AnchorError(e) => Some(e.error_name.as_str()),
        _ => None,
    }
}

/// Just the human-readable message, for the status bar.
pub fn error_message(err: &Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_msg.clone(),
        other => other.to_string(),
    }
}
