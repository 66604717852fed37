pub mod graph_repository;
pub mod sqlserver_repository;
