//! Lowering: syntax tree in, executable stack program out.
//!
//! The tree is lowered by one post-order walk into a flat instruction list
//! over an operand stack, with the stack's high-water mark computed during
//! emission so evaluation can allocate exactly once. No optimization is
//! applied; the program mirrors the tree shape instruction for instruction.

mod emit;
mod instruction;
mod program;

pub use emit::lower;
pub use program::CompiledFunction;
