pub mod growth;
pub mod indicator;
pub mod outcome;
