//! Falling-block stacking game core
//!
//! - [`piece`]: shape matrices, rotation and the falling piece value
//! - [`board`]: the 10x20 well with line-clear compaction
//! - [`collision`]: piece-vs-board overlap test
//! - [`queue`]: uniform random lookahead queue
//! - [`scoring`]: line points, four-line bonus, leveling, gravity speed
//! - [`engine`]: the game state machine
//! - [`snapshot`]: read-only projection for renderers

pub mod board;
pub mod collision;
pub mod engine;
pub mod piece;
pub mod queue;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use collision::collides;
pub use engine::{BlockEngine, BlockEvent};
pub use piece::{Piece, Shape};
pub use queue::PieceQueue;
pub use scoring::LockScore;
pub use snapshot::{ActiveSnapshot, BlockSnapshot};
