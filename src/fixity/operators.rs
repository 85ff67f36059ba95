//! Operators
//!
//!     Everything the expression parser knows about a language lives in an operator table:
//!     which token starts which construct, which token continues a left operand, how tightly
//!     each operator binds and in which direction it associates.
//!
//!     Descriptors come in two shapes:
//!
//!         - [OperatorSpec](spec::OperatorSpec): one variant per fixity and arity, used by the
//!           parser. Illegal field combinations cannot be expressed.
//!         - [OperatorRecord](record::OperatorRecord): the flat, serde-friendly record used by
//!           configuration files. Converting a record validates that the populated token fields
//!           match the declared fixity.
//!
//!     [OperatorTable](table::OperatorTable) indexes validated specs by lead token and by bind
//!     token and rejects any table the parser could not drive deterministically.

pub mod error;
pub mod record;
pub mod spec;
pub mod table;

pub use error::ConfigError;
pub use record::{OperatorKind, OperatorRecord};
pub use spec::{Arity, Assoc, AtomKind, Fixity, OperatorSpec};
pub use table::OperatorTable;
