pub mod builder;
pub mod decode;
pub mod directory;
pub mod encode;
pub mod error;
pub mod resize;
pub mod sizes;

// Re-export primary types for convenience.
pub use builder::{BuildReport, IconBuilder, WriteMode};
pub use decode::{decode_bytes, decode_file};
pub use directory::{IconDirectory, IconEntry, PayloadKind};
pub use encode::encode_ico;
pub use error::IconError;
pub use resize::{resize_all, resize_variant, RESAMPLE_FILTER};
pub use sizes::{IconSize, SizeSet};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, IconError>;
