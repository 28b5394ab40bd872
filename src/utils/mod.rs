pub mod input;
pub mod terminal;

pub use input::{read_input, read_input_file, validate_file_size, write_output_file};
pub use terminal::sanitize_for_terminal;
