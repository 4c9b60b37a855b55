pub mod ini_reader;
pub mod string;

// Re-export common utilities
pub use ini_reader::IniReader;
