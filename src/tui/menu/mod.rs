pub mod handler;
pub mod state;
pub mod view;

pub use state::State;
