mod insert;
pub mod node;
mod tree;

pub use node::{Edge, ParamSlot, RouteNode};
pub use tree::RouteTable;
