pub mod similarity;
pub mod stopwords;
pub mod text;

pub use similarity::*;
pub use stopwords::*;
pub use text::*;
