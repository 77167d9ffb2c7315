pub mod assessment;
pub mod case;
pub mod inputs;
