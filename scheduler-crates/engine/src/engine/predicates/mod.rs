mod predicate;

pub use predicate::Predicate;
