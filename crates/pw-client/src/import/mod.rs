pub(crate) mod file_import;

pub use file_import::FileImport;
