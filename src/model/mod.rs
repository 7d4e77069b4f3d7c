pub mod card;
pub mod device;
pub mod display;
pub mod envelope;
pub mod track;
