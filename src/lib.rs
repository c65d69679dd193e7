//! Segment trie HTTP router.
//!
//! Routes are registered as `(method, pattern, handler)`, where a pattern
//! segment starting with `$` or `:` captures a named parameter. Consecutive
//! literal segments share one trie edge, literal edges take priority over
//! parameters, and a parameter may be guarded by a named validator.
//!
//! ```
//! use routify::{Router, Validator, validators};
//!
//! let router: Router<&str> = Router::new(None);
//! router.add_validator("year", Validator::new(validators::is_year)).unwrap();
//! router.add("GET", "/archives/$year", "archive").unwrap();
//! router.seal();
//!
//! let (handler, params) = router.get("GET", "/archives/2015").unwrap();
//! assert_eq!(*handler, "archive");
//! assert_eq!(params.get_int("year").unwrap(), 2015);
//! ```
//!
//! The [`compiler`] turns a YAML manifest into Rust source for a
//! [`StaticTable`], so the trie can be built at compile time.

pub mod compiler;
pub mod enums;
pub mod errors;
pub mod matcher;
mod path;
pub mod pattern;
pub mod radix;
pub mod readonly;
pub mod router;
pub mod validators;

pub use enums::HttpMethod;
pub use errors::{ErrorKind, RouteError, RouteResult};
pub use matcher::{Destination, ParamError, Params, RouteLookup, Scanner};
pub use radix::RouteTable;
pub use readonly::{StaticNode, StaticParam, StaticTable};
pub use router::{DuplicatePolicy, Router, RouterOptions};
pub use validators::{SegmentValidator, Validator};
