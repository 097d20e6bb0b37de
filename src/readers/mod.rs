pub mod ghcn_reader;

pub use ghcn_reader::GhcnReader;
