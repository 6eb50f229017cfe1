pub mod doc_server;
