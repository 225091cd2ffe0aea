//! # ringlist
//!
//! This crate provides a production-ready position-indexed circular doubly
//! linked list. A [`CircularList`] owns a contiguous backing store of nodes
//! and keeps circular next/previous links among them as indices into that
//! store. Growing or shrinking the store may relocate it in memory, so every
//! insertion and deletion re-derives all positions and links before it
//! returns; indices never go stale.
//!
//! Payloads are caller-owned. The list stores at most one value per node,
//! never inspects it, and hands it back whenever an operation displaces it.

pub mod circular_list;
pub mod error;

pub use circular_list::{CircularList, Node, LABEL_CAPACITY};
pub use error::ListError;
