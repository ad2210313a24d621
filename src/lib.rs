pub mod array;
mod gaussian;
pub mod symbols;
pub mod traits;

pub use array::GaussianArray;
pub use gaussian::{
    complex_distance, is_prime, is_real_prime, round_complex, GaussianInt, GaussianIntBase,
    PrimalityCache,
};
pub use traits::{ErrorKind, GaussianError};
