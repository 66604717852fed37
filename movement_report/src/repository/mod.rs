pub mod graph_repository_impl;
pub mod sqlserver_repository_impl;
