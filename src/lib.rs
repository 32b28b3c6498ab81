pub mod config;
pub mod crawler;
pub mod graph;
