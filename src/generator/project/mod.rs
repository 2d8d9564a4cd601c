mod generate;
mod summary;

pub use generate::{render_widget, write_file_set, GeneratedFile, GeneratedFileSet, WriteReport};
pub use summary::GenerationSummary;
