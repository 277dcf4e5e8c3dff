mod prop;
pub use prop::*;

mod parse;
pub use parse::*;
