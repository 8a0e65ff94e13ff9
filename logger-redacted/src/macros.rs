// Logging macros that pass free text through a redactor first

/// `redacted_info!(redactor, text, key = value, ..., "message")`
#[macro_export]
macro_rules! redacted_info {
    ($redactor:expr, $text:expr, $($arg:tt)*) => {
        $crate::tracing::info!(text = %$redactor.redact($text), $($arg)*)
    };
}

/// `redacted_debug!(redactor, text, key = value, ..., "message")`
#[macro_export]
macro_rules! redacted_debug {
    ($redactor:expr, $text:expr, $($arg:tt)*) => {
        $crate::tracing::debug!(text = %$redactor.redact($text), $($arg)*)
    };
}
