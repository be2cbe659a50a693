mod session_rng;
mod tictactoe_session;

pub use session_rng::SessionRng;
pub use tictactoe_session::{FirstPlayerMode, GameSession, SessionSettings};
