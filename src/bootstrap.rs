use crate::book::seed::Seed;
use crate::config::{self, Database};
use crate::display::Table;
use crate::error::Error;
use crate::store::diesel::PgStore;
use crate::store::{BookStore, SeedReport};
use polars::prelude::DataFrame;
use std::io::{self, Write};
use tracing::{error, info};

/// 하나의 연결로 스키마 생성, 초기 데이터 삽입, 조회를 차례로 수행한다.
/// 진행 상황과 조회 결과는 `out` 에 기록된다.
///
/// 연결은 [`Bootstrapper::shutdown`] 이 호출되거나 값이 drop 될 때 닫히므로
/// 어느 단계에서 실패하더라도 연결이 남지 않는다.
pub struct Bootstrapper<S: BookStore, W: Write> {
    store: Option<S>,
    out: W,
    released: bool,
}

impl<W: Write> Bootstrapper<PgStore, W> {
    pub fn connect(&mut self, db: &Database) -> Result<(), Error> {
        info!(host = db.host(), database = db.name(), user = db.user(), "connecting to database");
        self.open(|| PgStore::establish(db))
    }
}

impl<S: BookStore, W: Write> Bootstrapper<S, W> {
    /// 연결되지 않은 상태로 생성한다.
    pub fn new(out: W) -> Self {
        Self {
            store: None,
            out,
            released: false,
        }
    }

    pub fn with_store(store: S, out: W) -> Self {
        Self {
            store: Some(store),
            out,
            released: false,
        }
    }

    /// `open` 으로 저장소를 연다. 이미 종료된 경우 [`Error::Closed`] 를 반환한다.
    pub fn open<F>(&mut self, open: F) -> Result<(), Error>
    where F: FnOnce() -> Result<S, Error>,
    {
        if self.released {
            return Err(Error::Closed);
        }
        self.store = Some(open()?);
        Ok(())
    }

    fn store(&mut self) -> Result<&mut S, Error> {
        self.store.as_mut().ok_or(Error::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.store.is_none()
    }

    pub fn ensure_schema(&mut self) -> Result<(), Error> {
        self.store()?.create_schema()?;
        info!("schema is ready");
        Ok(())
    }

    /// 초기 데이터를 무조건 삽입한다. 다시 실행하면 같은 행이 중복으로 추가된다.
    pub fn seed_data(&mut self) -> Result<SeedReport, Error> {
        let seed = Seed::literal()?;
        let report = self.store()?.insert_seed(&seed)?;
        info!(
            publishers = report.publishers,
            authors = report.authors,
            books = report.books,
            book_authors = report.book_authors,
            "seed data inserted"
        );
        Ok(report)
    }

    pub fn frame(&mut self, table: Table) -> Result<DataFrame, Error> {
        self.store()?.load_frame(table)
    }

    /// 테이블 전체를 조회하여 표 형태로 출력한다.
    pub fn display(&mut self, table_name: &str) -> Result<(), Error> {
        let table = table_name.parse::<Table>()?;
        let frame = self.frame(table)?;
        writeln!(self.out, "{} Table:", table.title()).map_err(Error::Output)?;
        writeln!(self.out, "{}", frame).map_err(Error::Output)?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", line).map_err(Error::Output)
    }

    pub fn report(&mut self, err: &Error) {
        error!(kind = ?err.kind(), "{}", err);
        _ = writeln!(self.out, "An error occurred: {}", err);
    }

    /// 연결을 닫는다. 연결되지 않았더라도 종료 메시지는 한번 출력되며,
    /// 두번째 호출부터는 아무 일도 하지 않는다.
    pub fn shutdown(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(store) = self.store.take() {
            drop(store);
            info!("connection closed");
        }
        _ = writeln!(self.out, "Connection closed.");
    }
}

impl<S: BookStore, W: Write> Drop for Bootstrapper<S, W> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// 환경 변수에서 접속 정보를 읽어 stdout 에 결과를 출력하며 실행한다.
pub fn run() -> Result<(), Error> {
    let mut bootstrapper = Bootstrapper::<PgStore, _>::new(io::stdout());
    let result = config::load_database_config()
        .map_err(Error::from)
        .and_then(|db| bootstrapper.connect(&db))
        .and_then(|_| steps(&mut bootstrapper));
    finish(bootstrapper, result)
}

/// 주어진 접속 정보로 [`run`] 과 같은 순서를 실행한다.
pub fn run_on(db: &Database) -> Result<(), Error> {
    let mut bootstrapper = Bootstrapper::<PgStore, _>::new(io::stdout());
    let result = bootstrapper.connect(db).and_then(|_| steps(&mut bootstrapper));
    finish(bootstrapper, result)
}

/// 연결, 스키마 생성, 데이터 삽입, publishers 출력 순으로 실행한다.
/// 첫번째 오류에서 중단하고 오류를 보고한 뒤 연결을 닫는다.
pub fn run_with<S, W, F>(mut bootstrapper: Bootstrapper<S, W>, open: F) -> Result<(), Error>
where
    S: BookStore,
    W: Write,
    F: FnOnce() -> Result<S, Error>,
{
    let result = bootstrapper.open(open).and_then(|_| steps(&mut bootstrapper));
    finish(bootstrapper, result)
}

fn steps<S: BookStore, W: Write>(bootstrapper: &mut Bootstrapper<S, W>) -> Result<(), Error> {
    bootstrapper.ensure_schema()?;
    bootstrapper.say("Tables created successfully.")?;

    bootstrapper.seed_data()?;
    bootstrapper.say("Data inserted successfully.")?;

    bootstrapper.display(Table::Publishers.name())
}

fn finish<S: BookStore, W: Write>(mut bootstrapper: Bootstrapper<S, W>, result: Result<(), Error>) -> Result<(), Error> {
    if let Err(err) = &result {
        bootstrapper.report(err);
    }
    bootstrapper.shutdown();
    result
}
