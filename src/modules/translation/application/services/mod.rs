pub mod bilingual_writer;

pub use bilingual_writer::BilingualWriter;
