mod words;

pub use words::WordCounter;
