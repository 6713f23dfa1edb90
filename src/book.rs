//! 출판사, 저자, 도서 테이블과 초기 데이터.

pub mod ddl;
pub mod entity;
pub mod schema;
pub mod seed;
