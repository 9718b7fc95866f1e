pub mod errors;
pub mod sniffer;
pub mod value_objects;
