use crate::book::seed::Seed;
use crate::display::Table;
use crate::error::Error;
use polars::prelude::DataFrame;

pub mod diesel;

/// 테이블 별로 삽입된 행 수
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub publishers: usize,
    pub authors: usize,
    pub books: usize,
    pub book_authors: usize,
}

/// 하나의 데이터베이스 연결을 소유하는 저장소.
/// 저장소가 drop 되면 연결도 닫힌다.
pub trait BookStore {
    /// 네 개의 테이블이 없으면 생성한다.
    fn create_schema(&mut self) -> Result<(), Error>;

    /// 테이블 별로 하나의 INSERT 문을 참조 순서대로 실행한다.
    /// 각 문장은 독립적으로 커밋되므로 중간에 실패해도 앞서 삽입된 행은 남는다.
    fn insert_seed(&mut self, seed: &Seed) -> Result<SeedReport, Error>;

    fn load_frame(&mut self, table: Table) -> Result<DataFrame, Error>;
}
