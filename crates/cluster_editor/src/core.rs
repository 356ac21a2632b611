pub mod effects;
pub mod executor;
pub mod reducer;
pub mod session;
pub mod state;
pub mod validation;
