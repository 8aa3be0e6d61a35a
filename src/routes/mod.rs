pub mod fishing_results;
pub mod health;
