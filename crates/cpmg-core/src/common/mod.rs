pub mod constants;

pub use constants::{Nucleus, ppm_to_rads};
