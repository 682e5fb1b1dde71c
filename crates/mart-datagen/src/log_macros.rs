/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field so plain-text output renders a
/// `[domain]` prefix. Domains used in this crate: `sys`, `gen`, `io`.
///
/// ```ignore
/// mg_info!(gen, users = 1000, "users generated");
/// mg_debug!(io, path = %path.display(), "file opened");
/// ```

#[doc(hidden)]
macro_rules! mg_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

/// Log at WARN level with an automatic `domain` field.
macro_rules! mg_warn {
    ($domain:ident, $($rest:tt)*) => {
        mg_log!(warn, $domain, $($rest)*)
    };
}

/// Log at INFO level with an automatic `domain` field.
macro_rules! mg_info {
    ($domain:ident, $($rest:tt)*) => {
        mg_log!(info, $domain, $($rest)*)
    };
}

/// Log at DEBUG level with an automatic `domain` field.
macro_rules! mg_debug {
    ($domain:ident, $($rest:tt)*) => {
        mg_log!(debug, $domain, $($rest)*)
    };
}
