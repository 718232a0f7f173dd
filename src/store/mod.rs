pub mod activities;
pub mod trips;
