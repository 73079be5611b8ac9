//! Composable accessors for immutable data.
//!
//! An accessor focuses on part of a larger value and supports reading and
//! non-destructive updates (every write returns a new value). Three kinds are
//! provided, ordered by how many foci they admit:
//!
//! - [`Lens`]: exactly one focus (total access)
//! - [`Optional`]: zero or one focus (partial access)
//! - [`Every`]: zero or more foci (bulk access)
//!
//! Accessors compose: the result of composing two accessors is the weaker of
//! the two kinds (a lens is stronger than an optional, which is stronger
//! than an every), and composition is associative. Absence is an ordinary
//! outcome, never an error: a partial read returns `None` and a write
//! against a missing focus returns the source unchanged.
//!
//! # Example
//!
//! ```
//! use json_optics_core::Optional;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Server { host: String, port: Option<u16> }
//!
//! let port = Optional::new(
//!     |server: &Server| server.port,
//!     |server, port| Server { port: Some(port), ..server },
//! );
//!
//! let server = Server { host: "localhost".into(), port: Some(8080) };
//! assert_eq!(port.get(&server), Some(8080));
//!
//! let moved = port.set(server, 9090);
//! assert_eq!(moved.port, Some(9090));
//! ```

mod lens;
pub use lens::Lens;

mod optional;
pub use optional::Optional;

mod every;
pub use every::Every;

mod monoid;
pub use monoid::Monoid;
