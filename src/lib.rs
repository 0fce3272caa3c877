pub mod error;
pub mod heap;

#[cfg(test)]
mod testing;

pub use error::HeapError;
pub use heap::MaxHeap;
