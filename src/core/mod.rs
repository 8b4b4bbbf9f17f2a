pub mod matcher;
pub mod palette;
pub mod report;
