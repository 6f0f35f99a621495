//! Result file: translation of response codes and CSV output.

mod aggregate;
mod translate;
mod writer;

pub use aggregate::aggregate;
pub use translate::translate_status;
pub use writer::ResultWriter;
