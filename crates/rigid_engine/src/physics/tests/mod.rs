//! Whole-scene scenarios exercising gravity, integration and resolution
//! together

mod stacking;
