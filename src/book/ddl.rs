/// 참조 관계 순서(publishers, authors, books, book_authors)대로 테이블을 생성한다.
/// 이미 존재하는 테이블은 건너뛰므로 여러번 실행해도 결과가 같다.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS publishers (
    publisher_id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS authors (
    author_id SERIAL PRIMARY KEY,
    first_name VARCHAR(100) NOT NULL,
    middle_name VARCHAR(50),
    last_name VARCHAR(100)
);

CREATE TABLE IF NOT EXISTS books (
    book_id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    total_pages INT,
    rating DECIMAL(4, 2),
    isbn VARCHAR(13),
    published_date DATE,
    publisher_id INT REFERENCES publishers(publisher_id)
);

CREATE TABLE IF NOT EXISTS book_authors (
    book_id INT REFERENCES books(book_id),
    author_id INT REFERENCES authors(author_id),
    PRIMARY KEY(book_id, author_id)
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [&str; 4] = ["publishers", "authors", "books", "book_authors"];

    #[test]
    fn every_statement_is_guarded() {
        let creates = CREATE_TABLES.matches("CREATE TABLE").count();
        let guarded = CREATE_TABLES.matches("CREATE TABLE IF NOT EXISTS").count();
        assert_eq!(creates, TABLES.len());
        assert_eq!(guarded, creates);
    }

    #[test]
    fn tables_are_created_before_they_are_referenced() {
        let position = |table: &str| CREATE_TABLES
            .find(&format!("CREATE TABLE IF NOT EXISTS {} (", table))
            .unwrap();

        let positions = TABLES.map(position);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
