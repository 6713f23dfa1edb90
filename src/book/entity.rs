use crate::book::schema::{authors, book_authors, books, publishers};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::{Insertable, Queryable, Selectable};

/// 출판사 모델
#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = publishers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Publisher {
    pub publisher_id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = publishers)]
pub struct NewPublisher<'a> {
    pub name: &'a str,
}

/// 저자 모델
#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Author {
    pub author_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = authors)]
pub struct NewAuthor<'a> {
    pub first_name: &'a str,
    pub middle_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

/// 도서 모델
#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub total_pages: Option<i32>,
    pub rating: Option<BigDecimal>,
    pub isbn: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = books)]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub total_pages: Option<i32>,
    pub rating: Option<BigDecimal>,
    pub isbn: Option<&'a str>,
    pub published_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
}

/// 도서와 저자의 연결
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy, PartialEq, Eq)]
#[diesel(table_name = book_authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookAuthor {
    pub book_id: i32,
    pub author_id: i32,
}
