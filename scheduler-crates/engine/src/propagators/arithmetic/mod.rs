pub(crate) mod linear_less_or_equal;
