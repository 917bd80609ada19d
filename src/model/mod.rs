pub mod dataset;
pub mod graph;
pub mod plan;
pub mod predict;
