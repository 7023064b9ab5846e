pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod quotes;
pub mod sentiment;
