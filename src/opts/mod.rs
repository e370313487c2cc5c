use std::panic;

use log::error;

use crate::{Error, Result};

pub mod cli;

pub use self::cli::{Cli, Command};

/// Text logged for a failed command.
pub fn error_message(e: &Error) -> String {
    match e {
        Error::Paginate(e) | Error::Registry(::registry::Error::Paginate(e)) => {
            format!("Pagination error: {}", e)
        }
        _ => e.to_string(),
    }
}

pub fn print_error(e: Error) {
    error!("{}", error_message(&e));
}

pub fn fatal(e: Error) -> Result<()> {
    print_error(e);
    std::process::exit(1);
}

pub fn panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = format!("{}", info);
        print_error(Error::Panic(message));
    }));
}

#[cfg(test)]
mod tests {
    use crate::opts::*;

    #[test]
    fn pagination_messages() {
        let invalid = || paginate::Error::InvalidArgument("per_page".to_string());
        let expected = format!("Pagination error: {}", invalid());
        assert_eq!(expected, error_message(&Error::Paginate(invalid())));
        assert_eq!(
            expected,
            error_message(&Error::Registry(registry::Error::Paginate(invalid())))
        );
    }

    #[test]
    fn other_messages() {
        let e = Error::Message("bad input".to_string());
        assert_eq!(e.to_string(), error_message(&e));
    }
}
