pub mod completion;
pub mod filter_translator;
pub mod generate;
pub mod lexical;
pub mod rag;
pub mod router;
pub mod semantic;

/// Fixed result page size for both retrievers.
pub const PAGE_SIZE: usize = 3;
