pub mod activities;
pub mod biometrics;
pub mod metrics;
