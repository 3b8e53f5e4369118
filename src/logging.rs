// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

// Every record emitted by this crate goes through these macros. Without the
// `logging` feature they expand to nothing, so the arguments are never
// evaluated.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "caldelta", $($tt)*)) }
}
