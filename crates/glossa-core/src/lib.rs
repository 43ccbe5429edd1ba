pub mod controller;
pub mod signal;
pub mod state;

pub use controller::{RequestTicket, TranslationController};
pub use signal::RedrawSignal;
pub use state::{DisplayHandle, DisplaySnapshot, IN_FLIGHT_STATUS, RequestState};

#[cfg(test)]
mod tests;
