pub mod provider;
pub mod state;
