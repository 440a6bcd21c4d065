pub mod export_row;
pub mod record;
