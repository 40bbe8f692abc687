pub mod reading;
pub mod sensor;
