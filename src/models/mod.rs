pub mod isbn;

pub use isbn::{Isbn10, IsbnPrefix, NumberingComponents};
