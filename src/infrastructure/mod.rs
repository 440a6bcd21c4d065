pub mod export;
pub mod providers;
