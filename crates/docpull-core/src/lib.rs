pub mod config;
pub mod logging;

pub mod collector;
pub mod fetcher;
pub mod http;
pub mod storage;
pub mod url_list;
pub mod url_model;
