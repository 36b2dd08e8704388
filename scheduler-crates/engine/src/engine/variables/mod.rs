mod affine_view;
mod domain_id;
mod integer_variable;
mod transformable_variable;

pub use affine_view::AffineView;
pub use domain_id::DomainId;
pub use integer_variable::IntegerVariable;
pub(crate) use integer_variable::TightenableVariable;
pub use transformable_variable::TransformableVariable;
