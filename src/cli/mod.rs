pub mod forms;
pub mod output;

use crate::errors::CashbookError;

/// Maps prompt failures (EOF, broken terminal) into the crate error type.
pub(crate) fn prompt_error(err: dialoguer::Error) -> CashbookError {
    match err {
        dialoguer::Error::IO(io) => CashbookError::Io(io),
    }
}
