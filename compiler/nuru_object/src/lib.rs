//! Nuru Object - runtime value model for the Nuru interpreter.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, `DictValue`, `FunctionValue`, `BuiltinValue`)
//! - Kind tags and capability queries (`Kind`)
//! - Dict key identity (`HashKey`, `Hashable`)
//! - The iteration protocol for strings, arrays and dicts (`ValueIter`, `Iterable`)
//! - Output-boundary rendering with optional colour (`Renderer`, `ColorMode`)
//! - Lexical scopes captured by functions (`Environment`, `LocalScope`)
//!
//! # Control Flow As Data
//!
//! `Return`, `Error`, `Break` and `Continue` are ordinary `Value` variants.
//! The evaluator checks `Value::kind()` (or `Value::is_signal()`) after each
//! step and decides whether to unwind. Nothing in this crate panics or unwinds
//! on user input; host-level faults come back as `ObjectError` and convert into
//! an `Error` value with `Value::from`.

mod environment;
mod errors;
mod hash_key;
mod iter;
mod kind;
mod render;
mod value;

use std::sync::Once;

pub use environment::{AssignError, Environment, LocalScope};
pub use errors::ObjectError;
pub use hash_key::{HashKey, Hashable};
pub use iter::{Iterable, ValueIter};
pub use kind::Kind;
pub use render::{ColorMode, Renderer, ERROR_LABEL};
pub use value::{
    BuiltinFn, BuiltinValue, DictPair, DictValue, ErrorValue, FunctionBody, FunctionValue, Heap,
    Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=nuru_object=debug` to see rejected dict keys or
/// `RUST_LOG=nuru_object=trace` to see dict traversal snapshots.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
