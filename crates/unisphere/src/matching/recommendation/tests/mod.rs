mod common;
mod ingest;
mod service;
