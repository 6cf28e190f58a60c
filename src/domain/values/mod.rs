pub mod classification;
pub mod date_range;
pub mod filter_expression;
pub mod filter_selection;
pub mod retrieval_mode;
pub mod retrieval_result;
pub mod search_request;
