pub mod dates;
pub mod error;
pub mod format_codes;
pub mod logger;
pub mod misc;
pub mod numbers;
pub mod validation;
