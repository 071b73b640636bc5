//! Config entry persistence implementations

mod in_memory;

pub use in_memory::InMemoryConfigEntryRepository;
