pub mod batch_reader;
pub mod report_writer;

pub use batch_reader::{load_batch, BatchGraph};
pub use report_writer::{print_summary, write_report, BatchReport, GraphReport};
