pub mod audio;
pub mod http_client;
pub mod observability;
pub mod storage;
pub mod translation;
