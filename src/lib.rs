#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Commons Util for Rust

 A toolkit of small, general-purpose helpers for building enterprise-grade
 applications: optional-value predicates and guards, collection batching and
 order-insensitive comparison, a dotted-path JSON accessor with per-prefix
 caching, a lexicographically time-ordered unique-id generator, a structured
 log-attribute builder, execution-context and response envelopes, date
 helpers, and file wrappers with read / process / write seams.

 ## Core Concepts

Understanding these core components will help you get started:

- **check / assert:** Predicates over `Option` values and guard functions
  that fail with a caller-supplied error, composing with `?`.
- **JsonObject:** Path-based access into a parsed JSON document; paths like
  `items.item[0].batters.batter[0].type` descend objects and index arrays,
  and the containing object of each leaf is cached per path prefix.
- **id:** 19-character unique ids that sort by generation time, even when
  several are taken within the same millisecond.
- **LogBuilder:** Collects the attributes of one unit of work and renders
  them as a single JSON object through the `log` facade.
- **TrackedFile:** A file handle carrying caller-defined attributes, with
  `FileReader` / `Processor` / `FileWriter` seams for small file pipelines.

 ## Modules

| **Module**   | **Description**                                              |
|--------------|--------------------------------------------------------------|
| `check`      | Emptiness and equality predicates over optional values       |
| `assert`     | Guards that fail with a caller-supplied error                |
| `collection` | Batching, cardinality comparison, coercing map reads         |
| `string`     | Trimming, joining, lexical cleanup                           |
| `number`     | Half-up rounding and numeric detection                       |
| `json`       | Dotted/indexed path accessor with per-prefix caching         |
| `id`         | Lexicographically time-ordered unique ids                    |
| `logging`    | Structured log-attribute builder                             |
| `http`       | Response envelope for HTTP-facing services                   |
| `context`    | Execution context with retry budget and metadata             |
| `time`       | Date patterns, parsing, ranges                               |
| `io`         | File helpers, console, read / process / write seams          |

 ## Getting Started

```rust
use commons_util_rs::{check, id, json::JsonObject};

fn main() -> Result<(), commons_util_rs::UtilError> {
    let order = JsonObject::from_str(
        r#"{"order":{"lines":[{"sku":"A-1","qty":2},{"sku":"B-7","qty":"5"}]}}"#,
    )?;

    assert_eq!(order.opt_string("order.lines[0].sku"), "A-1");
    assert_eq!(order.opt_i64("order.lines[1].qty"), 5);
    assert_eq!(order.opt_i64_or("order.lines[2].qty", -1), -1);

    let request_id = id::generate();
    assert_eq!(request_id.len(), 19);
    assert!(check::some_non_empty(Some(request_id.as_str())));

    Ok(())
}
```
 */

/// Guards that fail with a caller-supplied error.
pub mod assert;

/// Emptiness and equality predicates over optional values.
pub mod check;

/// Collection batching and comparison helpers.
pub mod collection;

/// Execution context carried through a unit of work.
pub mod context;

/// Error types for the toolkit.
pub mod error;

/// Response envelope for HTTP-facing services.
pub mod http;

/// Lexicographically time-ordered unique ids.
pub mod id;

/// File helpers, console, and read / process / write seams.
pub mod io;

/// Path-based access into parsed JSON documents.
pub mod json;

/// Structured log-attribute builder.
pub mod logging;

/// Numeric helpers.
pub mod number;

/// String helpers.
pub mod string;

/// Date patterns, parsing and ranges.
pub mod time;

#[doc(inline)]
pub use error::*;
