pub mod movement_record;
pub mod raw_count;
