pub mod dimacs;

pub use dimacs::ground_truth;
pub use dimacs::Dimacs;
pub use dimacs::DimacsInput;

use atoi::FromRadix10Checked;

use crate::index::Idx;

pub struct InputPath<P>(pub P);

pub trait InputCapabilities<NI: Idx> {
    type GraphInput;
}

/// Parses a whole field as an unsigned integer.
///
/// Returns `None` if the field is empty, contains anything but ASCII digits
/// or overflows `T`.
pub(crate) fn parse_number<T>(field: &[u8]) -> Option<T>
where
    T: FromRadix10Checked,
{
    match T::from_radix_10_checked(field) {
        (Some(value), used) if used == field.len() && used > 0 => Some(value),
        _ => None,
    }
}
