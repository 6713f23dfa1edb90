use crate::book::entity::{BookAuthor, NewAuthor, NewBook, NewPublisher};
use crate::error::Error;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

pub struct SeedAuthor {
    pub first_name: &'static str,
    pub middle_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
}

pub struct SeedBook {
    pub title: &'static str,
    pub total_pages: i32,
    pub rating: &'static str,
    pub isbn: Option<&'static str>,
    pub published_date: &'static str,
    pub publisher_id: i32,
}

pub const PUBLISHERS: [&str; 7] = [
    "O Reilly Media",
    "A Book Apart",
    "A K PETERS",
    "Academic Press",
    "Addison Wesley",
    "Albert&Sweigart",
    "Alfred A. Knopf",
];

pub const AUTHORS: [SeedAuthor; 8] = [
    SeedAuthor { first_name: "Merritt", middle_name: None, last_name: Some("Eric") },
    SeedAuthor { first_name: "Linda", middle_name: None, last_name: Some("Mui") },
    SeedAuthor { first_name: "Alecos", middle_name: None, last_name: Some("Papadatos") },
    SeedAuthor { first_name: "Anthony", middle_name: None, last_name: Some("Molinaro") },
    SeedAuthor { first_name: "David", middle_name: None, last_name: Some("Cronin") },
    SeedAuthor { first_name: "Richard", middle_name: None, last_name: Some("Blum") },
    SeedAuthor { first_name: "Yuval", middle_name: Some("Noah"), last_name: Some("Harari") },
    SeedAuthor { first_name: "Paul", middle_name: None, last_name: Some("Albitz") },
];

/// `publisher_id` 는 빈 데이터베이스에서 PUBLISHERS 가 1번부터 차례로 채번된다고 가정한 값이다.
pub const BOOKS: [SeedBook; 10] = [
    SeedBook {
        title: "Lean Software Development: An Agile Toolkit",
        total_pages: 240,
        rating: "4.17",
        isbn: Some("9780320000000"),
        published_date: "2003-05-18",
        publisher_id: 5,
    },
    SeedBook {
        title: "Facing the Intelligence Explosion",
        total_pages: 91,
        rating: "3.87",
        isbn: None,
        published_date: "2013-02-01",
        publisher_id: 7,
    },
    SeedBook {
        title: "Scala in Action",
        total_pages: 419,
        rating: "3.74",
        isbn: Some("9781940000000"),
        published_date: "2013-04-10",
        publisher_id: 1,
    },
    SeedBook {
        title: "Patterns of Software: Tales from the Software Community",
        total_pages: 256,
        rating: "3.84",
        isbn: Some("9780200000000"),
        published_date: "1996-08-15",
        publisher_id: 1,
    },
    SeedBook {
        title: "Anatomy Of LISP",
        total_pages: 446,
        rating: "4.43",
        isbn: Some("9780070000000"),
        published_date: "1978-01-01",
        publisher_id: 3,
    },
    SeedBook {
        title: "Computing machinery and intelligence",
        total_pages: 24,
        rating: "4.17",
        isbn: None,
        published_date: "2009-03-22",
        publisher_id: 4,
    },
    SeedBook {
        title: "XML: Visual QuickStart Guide",
        total_pages: 269,
        rating: "3.66",
        isbn: Some("9780320000000"),
        published_date: "2009-01-01",
        publisher_id: 5,
    },
    SeedBook {
        title: "SQL Cookbook",
        total_pages: 595,
        rating: "3.95",
        isbn: Some("9780600000000"),
        published_date: "2005-12-01",
        publisher_id: 7,
    },
    SeedBook {
        title: "The Apollo Guidance Computer: Architecture And Operation (Springer Praxis Books / Space Exploration)",
        total_pages: 439,
        rating: "4.29",
        isbn: Some("9781440000000"),
        published_date: "2010-07-01",
        publisher_id: 6,
    },
    SeedBook {
        title: "Minds and Computers: An Introduction to the Philosophy of Artificial Intelligence",
        total_pages: 222,
        rating: "3.54",
        isbn: Some("9780750000000"),
        published_date: "2007-02-13",
        publisher_id: 7,
    },
];

pub const BOOK_AUTHORS: [BookAuthor; 10] = [
    BookAuthor { book_id: 1, author_id: 1 },
    BookAuthor { book_id: 2, author_id: 8 },
    BookAuthor { book_id: 3, author_id: 7 },
    BookAuthor { book_id: 4, author_id: 6 },
    BookAuthor { book_id: 5, author_id: 5 },
    BookAuthor { book_id: 6, author_id: 4 },
    BookAuthor { book_id: 7, author_id: 3 },
    BookAuthor { book_id: 8, author_id: 2 },
    BookAuthor { book_id: 9, author_id: 4 },
    BookAuthor { book_id: 10, author_id: 1 },
];

/// 한번의 실행에서 테이블 별로 삽입할 행 목록
#[derive(Debug)]
pub struct Seed {
    pub publishers: Vec<NewPublisher<'static>>,
    pub authors: Vec<NewAuthor<'static>>,
    pub books: Vec<NewBook<'static>>,
    pub book_authors: Vec<BookAuthor>,
}

impl Seed {
    pub fn literal() -> Result<Self, Error> {
        let publishers = PUBLISHERS.iter()
            .map(|&name| NewPublisher { name })
            .collect();

        let authors = AUTHORS.iter()
            .map(|a| NewAuthor {
                first_name: a.first_name,
                middle_name: a.middle_name,
                last_name: a.last_name,
            })
            .collect();

        let books = BOOKS.iter()
            .map(new_book)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            publishers,
            authors,
            books,
            book_authors: BOOK_AUTHORS.to_vec(),
        })
    }
}

fn new_book(book: &SeedBook) -> Result<NewBook<'static>, Error> {
    let rating = BigDecimal::from_str(book.rating)
        .map_err(|e| invalid_book_value(book.rating, e.to_string()))?;
    let published_date = NaiveDate::parse_from_str(book.published_date, "%Y-%m-%d")
        .map_err(|e| invalid_book_value(book.published_date, e.to_string()))?;

    Ok(NewBook {
        title: book.title,
        total_pages: Some(book.total_pages),
        rating: Some(rating),
        isbn: book.isbn,
        published_date: Some(published_date),
        publisher_id: Some(book.publisher_id),
    })
}

fn invalid_book_value(value: &str, reason: String) -> Error {
    Error::InvalidSeed {
        table: "books",
        value: value.to_owned(),
        reason,
    }
}
