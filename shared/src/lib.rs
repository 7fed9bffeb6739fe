/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
* A newborn cell is owned by the player holding the majority of its three parents.
*
* The board is a torus: the left edge touches the right one, the top edge the bottom one.
*/

pub mod cell;
pub mod error;
pub mod grid;
pub mod observe;

pub use cell::{Cell, PlayerId};
pub use error::{GridError, Result};
pub use grid::{Grid, Move, Placement};
pub use observe::{TurnObserver, TurnStats};
