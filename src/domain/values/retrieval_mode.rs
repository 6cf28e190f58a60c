use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    LexicalBasic,
    Semantic,
    Completion,
    Rag,
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalMode::LexicalBasic => write!(f, "lexical"),
            RetrievalMode::Semantic => write!(f, "semantic"),
            RetrievalMode::Completion => write!(f, "llm"),
            RetrievalMode::Rag => write!(f, "rag"),
        }
    }
}

impl FromStr for RetrievalMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexical" | "basic" => Ok(RetrievalMode::LexicalBasic),
            "semantic" | "elser" => Ok(RetrievalMode::Semantic),
            "llm" | "completion" => Ok(RetrievalMode::Completion),
            "rag" => Ok(RetrievalMode::Rag),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
