pub mod assembler;
pub mod escape;
pub mod formatter;

pub use assembler::{convert_file, output_path_for};
pub use escape::escape_html;
pub use formatter::render_report;
