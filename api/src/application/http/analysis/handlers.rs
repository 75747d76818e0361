pub mod create_analysis;
