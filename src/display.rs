use crate::book::entity::{Author, Book, BookAuthor, Publisher};
use crate::error::Error;
use bigdecimal::ToPrimitive;
use polars::prelude::{Column, DataFrame, PolarsResult};
use std::str::FromStr;

/// 조회하여 출력할 수 있는 테이블
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Publishers,
    Authors,
    Books,
    BookAuthors,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Publishers => "publishers",
            Table::Authors => "authors",
            Table::Books => "books",
            Table::BookAuthors => "book_authors",
        }
    }

    /// 표 위에 출력되는 제목
    pub fn title(&self) -> &'static str {
        match self {
            Table::Publishers => "Publishers",
            Table::Authors => "Authors",
            Table::Books => "Books",
            Table::BookAuthors => "Book Authors",
        }
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publishers" => Ok(Table::Publishers),
            "authors" => Ok(Table::Authors),
            "books" => Ok(Table::Books),
            "book_authors" => Ok(Table::BookAuthors),
            _ => Err(Error::UnknownTable(s.to_owned())),
        }
    }
}

pub fn publishers_frame(rows: &[Publisher]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("publisher_id".into(), rows.iter().map(|r| r.publisher_id).collect::<Vec<_>>()),
        Column::new("name".into(), rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()),
    ])
}

pub fn authors_frame(rows: &[Author]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("author_id".into(), rows.iter().map(|r| r.author_id).collect::<Vec<_>>()),
        Column::new("first_name".into(), rows.iter().map(|r| r.first_name.as_str()).collect::<Vec<_>>()),
        Column::new("middle_name".into(), rows.iter().map(|r| r.middle_name.as_deref()).collect::<Vec<_>>()),
        Column::new("last_name".into(), rows.iter().map(|r| r.last_name.as_deref()).collect::<Vec<_>>()),
    ])
}

/// `rating` 은 f64 로, `published_date` 는 ISO 형식 문자열로 변환하여 출력한다.
pub fn books_frame(rows: &[Book]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("book_id".into(), rows.iter().map(|r| r.book_id).collect::<Vec<_>>()),
        Column::new("title".into(), rows.iter().map(|r| r.title.as_str()).collect::<Vec<_>>()),
        Column::new("total_pages".into(), rows.iter().map(|r| r.total_pages).collect::<Vec<_>>()),
        Column::new(
            "rating".into(),
            rows.iter().map(|r| r.rating.as_ref().and_then(|d| d.to_f64())).collect::<Vec<_>>(),
        ),
        Column::new("isbn".into(), rows.iter().map(|r| r.isbn.as_deref()).collect::<Vec<_>>()),
        Column::new(
            "published_date".into(),
            rows.iter().map(|r| r.published_date.map(|d| d.to_string())).collect::<Vec<_>>(),
        ),
        Column::new("publisher_id".into(), rows.iter().map(|r| r.publisher_id).collect::<Vec<_>>()),
    ])
}

pub fn book_authors_frame(rows: &[BookAuthor]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("book_id".into(), rows.iter().map(|r| r.book_id).collect::<Vec<_>>()),
        Column::new("author_id".into(), rows.iter().map(|r| r.author_id).collect::<Vec<_>>()),
    ])
}
