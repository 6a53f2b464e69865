//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate and
//! know nothing about turns or modes, so the state machine and the tests
//! can call them on any board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, has_won};
