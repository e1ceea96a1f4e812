pub mod session;

pub use session::CustomerSession;
