use crate::book::entity::{Author, Book, BookAuthor, Publisher};
use crate::book::schema::{authors, book_authors, books, publishers};
use crate::book::{ddl, seed::Seed};
use crate::config::Database;
use crate::display::{self, Table};
use crate::error::Error;
use crate::store::{BookStore, SeedReport};
use diesel::connection::SimpleConnection;
use diesel::pg::Pg;
use diesel::{debug_query, Connection, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};
use polars::prelude::DataFrame;
use tracing::{debug, enabled};

/// autocommit 모드의 단일 [`PgConnection`] 을 사용하는 저장소.
/// 트랜잭션을 열지 않으므로 모든 문장은 실행 즉시 커밋된다.
pub struct PgStore {
    conn: PgConnection,
}

impl PgStore {
    pub fn establish(db: &Database) -> Result<Self, Error> {
        let conn = PgConnection::establish(&db.url())?;
        Ok(Self { conn })
    }
}

pub fn sql_debugging<T>(sql: T) -> T
where T: diesel::query_builder::QueryFragment<Pg>,
{
    if enabled!(tracing::Level::DEBUG) {
        let debug_str = debug_query::<Pg, _>(&sql).to_string();
        debug!("SQL: {}", debug_str);
    }
    sql
}

impl BookStore for PgStore {
    fn create_schema(&mut self) -> Result<(), Error> {
        debug!("SQL: {}", ddl::CREATE_TABLES);
        self.conn
            .batch_execute(ddl::CREATE_TABLES)
            .map_err(Error::Schema)
    }

    fn insert_seed(&mut self, seed: &Seed) -> Result<SeedReport, Error> {
        let publishers = sql_debugging(diesel::insert_into(publishers::table).values(&seed.publishers))
            .execute(&mut self.conn)
            .map_err(|source| Error::Data { table: "publishers", source })?;

        let authors = sql_debugging(diesel::insert_into(authors::table).values(&seed.authors))
            .execute(&mut self.conn)
            .map_err(|source| Error::Data { table: "authors", source })?;

        let books = sql_debugging(diesel::insert_into(books::table).values(&seed.books))
            .execute(&mut self.conn)
            .map_err(|source| Error::Data { table: "books", source })?;

        let book_authors = sql_debugging(diesel::insert_into(book_authors::table).values(&seed.book_authors))
            .execute(&mut self.conn)
            .map_err(|source| Error::Data { table: "book_authors", source })?;

        Ok(SeedReport {
            publishers,
            authors,
            books,
            book_authors,
        })
    }

    fn load_frame(&mut self, table: Table) -> Result<DataFrame, Error> {
        let query_failed = |source| Error::Query { table: table.name(), source };

        let frame = match table {
            Table::Publishers => {
                let rows = sql_debugging(publishers::table
                    .order(publishers::publisher_id)
                    .select(Publisher::as_select()))
                    .load(&mut self.conn)
                    .map_err(query_failed)?;
                display::publishers_frame(&rows)
            }
            Table::Authors => {
                let rows = sql_debugging(authors::table
                    .order(authors::author_id)
                    .select(Author::as_select()))
                    .load(&mut self.conn)
                    .map_err(query_failed)?;
                display::authors_frame(&rows)
            }
            Table::Books => {
                let rows = sql_debugging(books::table
                    .order(books::book_id)
                    .select(Book::as_select()))
                    .load(&mut self.conn)
                    .map_err(query_failed)?;
                display::books_frame(&rows)
            }
            Table::BookAuthors => {
                let rows = sql_debugging(book_authors::table
                    .order((book_authors::book_id, book_authors::author_id))
                    .select(BookAuthor::as_select()))
                    .load(&mut self.conn)
                    .map_err(query_failed)?;
                display::book_authors_frame(&rows)
            }
        };

        frame.map_err(|source| Error::Render { table: table.name(), source })
    }
}
