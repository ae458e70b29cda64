pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{build_report, build_report_as_of};
pub use exec::exec;
pub use output::{output_json, render_text, write_text};
