/// Directory-of-documents store implementation.
pub mod directory_collection;
/// Single-file exported collection (JSON array or JSON Lines).
pub mod json_collection;
