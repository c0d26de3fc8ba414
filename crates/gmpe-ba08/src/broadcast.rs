//! NumPy-style broadcasting over dynamic-dimensional arrays.

use gmpe_core::errors::{ErrorInfo, GmpeError};
use ndarray::{ArrayD, ArrayViewD, IxDyn};

fn format_shape(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(|dim| dim.to_string()).collect();
    format!("({})", dims.join(","))
}

/// Computes the broadcast shape of several named input shapes.
///
/// Shapes are right-aligned; each axis must either match or be `1`.
pub fn broadcast_shape(shapes: &[(&str, &[usize])]) -> Result<Vec<usize>, GmpeError> {
    let ndim = shapes.iter().map(|(_, shape)| shape.len()).max().unwrap_or(0);
    let mut out = vec![1usize; ndim];
    for (name, shape) in shapes {
        let offset = ndim - shape.len();
        for (axis, &dim) in shape.iter().enumerate() {
            let slot = &mut out[offset + axis];
            if *slot == 1 {
                *slot = dim;
            } else if dim != 1 && dim != *slot {
                let mut info = ErrorInfo::new(
                    "broadcast-mismatch",
                    "input shapes cannot be broadcast together",
                )
                .with_context("axis", (offset + axis).to_string())
                .with_context("offending", (*name).to_string());
                for (other, other_shape) in shapes {
                    info = info.with_context(format!("shape.{other}"), format_shape(other_shape));
                }
                return Err(GmpeError::Shape(info));
            }
        }
    }
    Ok(out)
}

/// Broadcasts `array` to `shape`, reporting the input name on failure.
pub fn broadcast_to<'a, T>(
    name: &str,
    array: &'a ArrayD<T>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, T>, GmpeError> {
    array.broadcast(IxDyn(shape)).ok_or_else(|| {
        GmpeError::Shape(
            ErrorInfo::new("broadcast-mismatch", "input cannot be broadcast to the output shape")
                .with_context("input", name)
                .with_context("from", format_shape(array.shape()))
                .with_context("to", format_shape(shape)),
        )
    })
}
