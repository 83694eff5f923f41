pub use log::debug;

/// Write a per-contig trace message
///
/// When `$flag` is set the message goes straight to stderr, independent of the log level. This
/// is how `--debug-contig` traces a single contig through a multithreaded run. Otherwise the
/// message is an ordinary debug log entry, shown only with `--debug`.
///
/// ```ignore
/// let debug = debug_contig == Some(contig.name.as_str());
/// debug_msg!(debug, "Resolving contig '{}'", contig.name);
/// ```
macro_rules! debug_msg {
    ($flag:expr, $($arg:tt)+) => {
        if $flag {
            eprintln!($($arg)+);
        } else {
            $crate::log_utils::debug!($($arg)+);
        }
    }
}

pub(crate) use debug_msg;
