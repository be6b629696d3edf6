pub mod external;
pub mod tokenizer;
