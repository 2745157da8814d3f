//! Includes the types commonly used for hosting a loading indicator.

pub use crate::{
    CycleConfig, CycleConfiguration, HostView, LoadingIndicator, NullHost, Outline, Shape,
    Visibility,
};
