//! Engine error type and the panic guard around module calls

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use funzone_core::GameFault;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("game fault: {0}")]
    Fault(#[from] GameFault),

    #[error("game panicked: {0}")]
    Panicked(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Run `f`, turning a panic into [`EngineError::Panicked`]
pub fn guard<T>(f: impl FnOnce() -> T) -> Result<T, EngineError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| EngineError::Panicked(panic_message(&*payload)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_passes_values_through() {
        assert_eq!(guard(|| 7), Ok(7));
    }

    #[test]
    fn guard_captures_panic_messages() {
        let err = guard(|| -> u32 { panic!("boom {}", 1) }).unwrap_err();
        assert_eq!(err, EngineError::Panicked("boom 1".to_string()));
    }

    #[test]
    fn faults_convert() {
        let err: EngineError = GameFault::Invariant("x").into();
        assert!(err.to_string().contains("broken invariant"));
    }
}
