//! Testing utilities and harness for Vitrine

pub mod fixtures;
pub mod robot;
pub mod robot_assertions;

pub use fixtures::*;
pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions::*;
}
