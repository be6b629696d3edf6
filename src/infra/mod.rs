pub mod csv;
pub mod import;
pub mod storage;
