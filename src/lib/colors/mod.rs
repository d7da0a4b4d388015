pub mod convert;
pub mod modes;
pub mod palette;
