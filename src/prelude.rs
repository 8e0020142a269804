pub use nalgebra::{Matrix3, Vector3};
pub use crate::earth::Earth;
pub use crate::eci::ECI;
pub use crate::ecef::ECEF;
pub use crate::timestamp::Timestamp;
