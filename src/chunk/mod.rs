pub mod chunk;
pub mod loader;

pub use chunk::Chunk;
pub use loader::ChunkSequence;
