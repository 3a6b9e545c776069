mod file_import;
