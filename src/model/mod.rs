pub mod inputs;
pub mod result;

pub use inputs::{
    CarType, Climate, DietType, HomeSize, RawInputs, RawValue, UserInputs, MAX_QUANTITY,
};
pub use result::{Category, FootprintResult};
