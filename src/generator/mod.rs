pub mod answer;
pub mod outlet;
pub mod postprocess;
pub mod workflow;
