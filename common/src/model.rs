pub mod click;
pub mod destination;
pub mod status;
