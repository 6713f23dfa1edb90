use thiserror::Error;

/// 오류를 사용자에게 보고할 때 구분하는 네 가지 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Schema,
    Data,
    Query,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid database configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("could not connect to the database: {0}")]
    Connect(#[from] diesel::ConnectionError),

    #[error("connection is already closed")]
    Closed,

    #[error("failed to create schema: {0}")]
    Schema(#[source] diesel::result::Error),

    #[error("failed to insert seed data into {table}: {source}")]
    Data {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("invalid seed value {value:?} for {table}: {reason}")]
    InvalidSeed {
        table: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("failed to read {table}: {source}")]
    Query {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("failed to build a frame for {table}: {source}")]
    Render {
        table: &'static str,
        #[source]
        source: polars::prelude::PolarsError,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) | Error::Connect(_) | Error::Closed => ErrorKind::Connection,
            Error::Schema(_) => ErrorKind::Schema,
            Error::Data { .. } | Error::InvalidSeed { .. } => ErrorKind::Data,
            Error::UnknownTable(_) | Error::Query { .. } | Error::Render { .. } | Error::Output(_) => ErrorKind::Query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_reported_as_connection_errors() {
        let err = Error::from(config::ConfigError::NotFound("user".to_owned()));
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(Error::Closed.kind(), ErrorKind::Connection);
    }

    #[test]
    fn each_stage_maps_to_its_own_kind() {
        let schema = Error::Schema(diesel::result::Error::NotFound);
        let data = Error::Data { table: "books", source: diesel::result::Error::NotFound };
        let query = Error::UnknownTable("readers".to_owned());

        assert_eq!(schema.kind(), ErrorKind::Schema);
        assert_eq!(data.kind(), ErrorKind::Data);
        assert_eq!(query.kind(), ErrorKind::Query);
    }

    #[test]
    fn message_names_the_failing_table() {
        let err = Error::Data { table: "book_authors", source: diesel::result::Error::NotFound };
        assert_eq!(err.to_string(), "failed to insert seed data into book_authors: Record not found");
    }
}
