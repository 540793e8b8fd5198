pub mod centrality;
pub mod cluster;
pub mod paths;
pub mod words;
