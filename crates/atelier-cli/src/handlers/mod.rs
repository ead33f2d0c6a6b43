pub mod browse;
pub mod check;
pub mod resolve;
