pub mod elastic;
pub mod openai;
