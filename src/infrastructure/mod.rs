pub mod audio;
pub mod observability;
pub mod qa;
pub mod speech;
pub mod storage;
