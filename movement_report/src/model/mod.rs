pub mod configs;
pub mod movement;
pub mod report;
