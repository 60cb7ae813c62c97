//! Platform-specific key injection implementations.
//!
//! The correct implementation is selected at compile time via `#[cfg(target_os = ...)]`.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

use crate::application::dispatch_combination::{InjectionError, KeyInjector};

/// Returns the injector for the platform this binary was built for.
///
/// # Errors
///
/// Returns `InjectionError::Unavailable` if the platform back-end cannot be
/// initialised (no X display on Linux) or the OS is not supported.
pub fn default_injector() -> Result<Box<dyn KeyInjector>, InjectionError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(windows::WindowsKeyInjector::new()))
    }

    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(linux::XTestKeyInjector::new()?))
    }

    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(macos::CoreGraphicsKeyInjector::new()))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        Err(InjectionError::Unavailable(format!(
            "no key injector for {}",
            std::env::consts::OS
        )))
    }
}
