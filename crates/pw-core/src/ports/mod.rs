pub mod draft_client;
pub mod import_phase;
pub mod navigator;
