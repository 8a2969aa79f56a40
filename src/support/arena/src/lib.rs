#![no_std]

/*
    =======================  support/arena/src/lib.rs  ========================
    Typed index arenas that give IR entities stable identities
    ---------------------------------------------------------------------------
*/

mod arena;
mod id;
mod idx;
mod iter;
mod new_id;

extern crate alloc;

pub use arena::Arena;
pub use id::Id;
pub use idx::Idx;
pub use iter::{IntoIter, Iter, IterMut};
pub use new_id::NewId;
