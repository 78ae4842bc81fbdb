pub mod driver;
pub mod kinematics;
pub mod rng;
pub mod scene;
