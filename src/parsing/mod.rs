//! Parsers for documents returned by the DART open API.

pub mod statement;
