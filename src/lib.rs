pub mod calculator;
pub mod string_processor;

pub use calculator::{add, format_message, multiply};
pub use string_processor::{is_valid, process_list, write_list};
