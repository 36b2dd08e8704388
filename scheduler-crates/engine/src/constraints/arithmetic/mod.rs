mod equality;
mod inequality;

pub use equality::*;
pub use inequality::*;
