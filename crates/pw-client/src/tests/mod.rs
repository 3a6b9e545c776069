mod client;
mod import;
