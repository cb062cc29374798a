//! Error conversion from internal error types.
//!
//! This module provides conversions from engine, storage and core errors
//! to the executor's [`Error`] type.

use ledger_engine::LedgerError;
use ledger_storage::StorageError;

use crate::Error;

impl From<LedgerError> for Error {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::RowNotFound(id) => Error::RowNotFound { key: id.as_u64() },
            LedgerError::InvalidPages(input) => Error::InvalidPages { input },
            LedgerError::KeysExhausted => Error::KeysExhausted,
            LedgerError::ReadOnlyRows => Error::ReadOnlyRows,
            LedgerError::Config(reason) => Error::Config { reason },
            LedgerError::Storage(e) => e.into(),
        }
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded { needed, quota } => Error::QuotaExceeded { needed, quota },
            StorageError::Serialization(reason) => Error::Serialization { reason },
        }
    }
}

impl From<ledger_core::Error> for Error {
    fn from(err: ledger_core::Error) -> Self {
        match err {
            ledger_core::Error::UnknownField(field) => Error::UnknownField { field },
            ledger_core::Error::InvalidPages(input) => Error::InvalidPages { input },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::BookId;

    #[test]
    fn test_row_not_found_keeps_key() {
        let err: Error = LedgerError::RowNotFound(BookId::new(7)).into();
        assert_eq!(err, Error::RowNotFound { key: 7 });
    }

    #[test]
    fn test_storage_errors_flatten() {
        let err: Error = LedgerError::Storage(StorageError::QuotaExceeded {
            needed: 10,
            quota: 5,
        })
        .into();
        assert_eq!(err, Error::QuotaExceeded { needed: 10, quota: 5 });

        let err: Error = LedgerError::Storage(StorageError::Serialization("eof".into())).into();
        assert_eq!(
            err,
            Error::Serialization {
                reason: "eof".into()
            }
        );
    }

    #[test]
    fn test_core_unknown_field() {
        let err: Error = ledger_core::Error::UnknownField("isbn".into()).into();
        assert_eq!(
            err,
            Error::UnknownField {
                field: "isbn".into()
            }
        );
    }
}
