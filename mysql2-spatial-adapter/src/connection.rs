//! Connection seam.
//!
//! The adapter never talks to the network itself. It issues SQL text through
//! a [`Connection`] and gets back named-field rows. Driver errors are boxed
//! and surface unchanged through [`AdapterError::Connection`](crate::AdapterError::Connection).

use crate::error::BoxError;
use crate::row::Row;

/// A live database connection owned by one caller at a time.
///
/// Every call is a blocking round-trip; timeouts and cancellation belong to
/// the implementation.
pub trait Connection {
    /// Run a statement that returns rows.
    fn query(&mut self, sql: &str) -> std::result::Result<Vec<Row>, BoxError>;

    /// Run a statement for its side effect, returning the affected row count.
    fn execute(&mut self, sql: &str) -> std::result::Result<u64, BoxError>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    fn query(&mut self, sql: &str) -> std::result::Result<Vec<Row>, BoxError> {
        (**self).query(sql)
    }

    fn execute(&mut self, sql: &str) -> std::result::Result<u64, BoxError> {
        (**self).execute(sql)
    }
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn query(&mut self, sql: &str) -> std::result::Result<Vec<Row>, BoxError> {
        (**self).query(sql)
    }

    fn execute(&mut self, sql: &str) -> std::result::Result<u64, BoxError> {
        (**self).execute(sql)
    }
}
