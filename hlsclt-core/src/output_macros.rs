//! Output macros for the hlsclt CLI.
//!
//! Command results and report warnings go to stdout so they can be piped;
//! fatal errors and hints go to stderr. Templates live in `hlsclt-messages`.

#[macro_export]
macro_rules! hls_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! hls_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

/// Non-fatal problems the user should see in the command output.
#[macro_export]
macro_rules! hls_warning {
    ($($arg:tt)*) => {
        println!("⚠ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! hls_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    };
}
