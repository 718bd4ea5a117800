pub mod atmosphere;
pub mod gravity;
pub mod propulsion;
