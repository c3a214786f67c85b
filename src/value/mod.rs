pub mod merge;
pub mod predicates;

pub use merge::{extend_owned, extend_values, simple_extend};
pub use predicates::{
    as_number_like, first_number_like, is_array, is_number_like, is_object, is_string, kind_of,
    parse_float_prefix, ValueKind,
};
