pub mod token;
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::{split_words, tokenize_text};
