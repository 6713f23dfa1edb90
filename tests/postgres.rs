//! 실제 PostgreSQL 데이터베이스가 필요한 테스트로 `DB_*` 환경 변수로 접속한다.
//! 테스트마다 네 개의 테이블을 삭제하므로 전용 데이터베이스에서
//! `cargo test -- --ignored --test-threads=1` 로 실행한다.

use book_seed::book::schema::{authors, book_authors, books, publishers};
use book_seed::bootstrap::{run_on, run_with, Bootstrapper};
use book_seed::store::diesel::PgStore;
use book_seed::config::{self, Database};
use book_seed::{Error, ErrorKind};
use diesel::connection::SimpleConnection;
use diesel::sql_types::Text;
use diesel::{Connection, PgConnection, QueryDsl, QueryableByName, RunQueryDsl};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Mutex;

static DATABASE: Mutex<()> = Mutex::new(());

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    table_name: String,
}

#[derive(Default, Clone)]
struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.borrow())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn assert_reported_then_closed(out: &Output, message: &str) {
    let lines = out.lines();
    assert_eq!(lines.len(), 2, "{:?}", lines);
    assert!(lines[0].starts_with(message), "{:?}", lines);
    assert_eq!(lines[1], "Connection closed.");
}

fn database() -> Database {
    config::load_dotenv();
    config::load_database_config().expect("DB_USER, DB_PASSWORD, DB_HOST, DB_NAME must be set")
}

fn reset(db: &Database) -> PgConnection {
    let mut conn = PgConnection::establish(&db.url()).expect("Failed to connect to test database");
    conn.batch_execute("DROP TABLE IF EXISTS book_authors, books, authors, publishers")
        .expect("Failed to drop tables");
    conn
}

fn row_counts(conn: &mut PgConnection) -> (i64, i64, i64, i64) {
    (
        publishers::table.count().get_result(conn).unwrap(),
        authors::table.count().get_result(conn).unwrap(),
        books::table.count().get_result(conn).unwrap(),
        book_authors::table.count().get_result(conn).unwrap(),
    )
}

fn seeded_tables(conn: &mut PgConnection) -> Vec<String> {
    diesel::sql_query(
        "SELECT table_name::text AS table_name FROM information_schema.tables \
         WHERE table_schema = current_schema() \
         AND table_name IN ('publishers', 'authors', 'books', 'book_authors') \
         ORDER BY table_name",
    )
    .load::<TableName>(conn)
    .unwrap()
    .into_iter()
    .map(|t| t.table_name)
    .collect()
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn single_run_seeds_every_table() {
    let _lock = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let db = database();
    let mut conn = reset(&db);

    run_on(&db).unwrap();

    assert_eq!(row_counts(&mut conn), (7, 8, 10, 10));
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn second_run_keeps_schema_and_duplicates_rows() {
    let _lock = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let db = database();
    let mut conn = reset(&db);

    run_on(&db).unwrap();
    let err = run_on(&db).unwrap_err();

    // book_authors 의 (book_id, author_id) 가 기본키와 충돌한다.
    assert_eq!(err.kind(), ErrorKind::Data);
    assert!(matches!(err, Error::Data { table: "book_authors", .. }));

    assert_eq!(seeded_tables(&mut conn), vec!["authors", "book_authors", "books", "publishers"]);
    assert_eq!(row_counts(&mut conn), (14, 16, 20, 10));
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn referenced_publishers_exist() {
    let _lock = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let db = database();
    let mut conn = reset(&db);

    run_on(&db).unwrap();

    let mut referenced = books::table
        .select(books::publisher_id)
        .distinct()
        .load::<Option<i32>>(&mut conn)
        .unwrap();
    referenced.sort();
    assert_eq!(referenced, vec![Some(1), Some(3), Some(4), Some(5), Some(6), Some(7)]);

    let publisher_ids = publishers::table
        .select(publishers::publisher_id)
        .load::<i32>(&mut conn)
        .unwrap();
    assert!(referenced.iter().flatten().all(|id| publisher_ids.contains(id)));
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn display_fails_when_table_is_missing() {
    let _lock = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let db = database();
    reset(&db);

    let mut bootstrapper = Bootstrapper::<PgStore, _>::new(io::sink());
    bootstrapper.connect(&db).unwrap();
    let err = bootstrapper.display("publishers").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Query);

    bootstrapper.shutdown();
    assert!(bootstrapper.is_closed());
    assert_eq!(bootstrapper.ensure_schema().unwrap_err().kind(), ErrorKind::Connection);
}

#[test]
fn missing_variable_is_a_connection_error() {
    let mut vars = config::Map::new();
    vars.insert("DB_USER".to_owned(), "nobody".to_owned());
    vars.insert("DB_HOST".to_owned(), "127.0.0.1".to_owned());
    vars.insert("DB_NAME".to_owned(), "missing".to_owned());
    let out = Output::default();

    let err = run_with(Bootstrapper::new(out.clone()), || {
        let db = config::database_config_from(Some(vars))?;
        PgStore::establish(&db)
    })
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(matches!(err, Error::Config(_)));
    assert_reported_then_closed(&out, "An error occurred: invalid database configuration:");
}

#[test]
fn unreachable_host_is_a_connection_error() {
    let mut vars = config::Map::new();
    vars.insert("DB_USER".to_owned(), "nobody".to_owned());
    vars.insert("DB_PASSWORD".to_owned(), "nothing".to_owned());
    vars.insert("DB_HOST".to_owned(), "127.0.0.1".to_owned());
    vars.insert("DB_PORT".to_owned(), "1".to_owned());
    vars.insert("DB_NAME".to_owned(), "missing".to_owned());
    let db = config::database_config_from(Some(vars)).unwrap();
    let out = Output::default();

    let err = run_with(Bootstrapper::new(out.clone()), || PgStore::establish(&db)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(matches!(err, Error::Connect(_)));
    assert_reported_then_closed(&out, "An error occurred: could not connect to the database:");
}
