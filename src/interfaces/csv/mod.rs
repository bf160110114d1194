pub mod request_reader;
pub mod statement_writer;
