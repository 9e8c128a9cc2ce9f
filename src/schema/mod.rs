pub mod classification;
pub mod level;
pub mod report;
pub mod story;
