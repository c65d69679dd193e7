mod params;
pub mod resolver;

pub use params::{
    Destination, Float, Param, ParamError, ParamResult, Params, ScanError, Scanner, Signed,
    Unsigned,
};
pub use resolver::{RouteLookup, TrieNode, find_route};
