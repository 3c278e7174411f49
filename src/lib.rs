//! JSON-backed data provider for parameterized tests.
//!
//! A [`JsonData`] names an entry of a JSON document (by default the test
//! method's name) and turns it into argument vectors for a [`TestMethod`]:
//! one vector per array element, or a single vector for an object. JSON
//! properties bind to parameters by name; inline values fill the leading
//! parameters unchanged.
//!
//! ```no_run
//! use json_data::{DeclaringType, JsonData, ParamType, TestMethod};
//!
//! let method = TestMethod::new("FromArrayTest", DeclaringType::new("my_tests.JsonDataTest"))
//!     .param("index", ParamType::of::<i32>())
//!     .param("value", ParamType::of::<String>());
//!
//! for case in JsonData::new().data(&method)? {
//!     let args = case?;
//!     let index = args.get_as::<i32>(0).copied().unwrap_or_default();
//!     assert_eq!(args.get_as::<String>(1), Some(&format!("FromArrayTestValue{index}")));
//! }
//! # Ok::<(), json_data::Error>(())
//! ```
pub mod binder;
pub mod data;
pub mod error;
pub mod logging;
pub mod resolver;

pub use binder::{bind, Argument, ArgumentVector, Binder, ParamType, Parameter};
pub use data::{JsonData, TestCases, TestMethod};
pub use error::{Error, Result};
pub use resolver::{select_key, Cases, DeclaringType, Resolver, ResourceStore, Source};
