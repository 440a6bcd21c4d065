pub mod fred;
pub mod sheets;
pub mod yahoo;
