//! Kernel dispatch: selection and caching.
//!
//! A dispatcher owns a selector function and runs it on first use. Under
//! `std` the result is cached in a `OnceLock`, so concurrent first callers
//! race safely and every caller observes the same kernel afterwards. Without
//! `std` the selector runs on every call; it only reads compile-time defaults,
//! so the answer never changes.
//!
//! # Usage
//!
//! ```ignore
//! use crc32itu::dispatchers::{Crc32Dispatcher, Crc32Fn, Selected};
//!
//! fn select() -> Selected<Crc32Fn> {
//!   Selected::new("portable/bytewise", bytewise_kernel)
//! }
//!
//! static DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select);
//! ```

/// Function signature for CRC-32 kernels.
///
/// # Arguments
///
/// * `state` - Current CRC register (complemented)
/// * `data` - Input data to process
///
/// # Returns
///
/// Updated register after processing the input data.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Dispatcher for CRC-32 kernels.
///
/// Caches the selected kernel on first access. Thread-safe.
pub struct Crc32Dispatcher {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<Crc32Fn>>,

  selector: fn() -> Selected<Crc32Fn>,
}

impl Crc32Dispatcher {
  /// Create a new dispatcher with the given selector function.
  #[must_use]
  pub const fn new(selector: fn() -> Selected<Crc32Fn>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  #[cfg(feature = "std")]
  fn run_selector(&self) -> Selected<Crc32Fn> {
    let selected = (self.selector)();
    log::debug!("crc32itu: selected kernel {}", selected.name);
    selected
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<Crc32Fn> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| self.run_selector())
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Get the selected kernel function.
  #[inline]
  #[must_use]
  pub fn kernel(&self) -> Crc32Fn {
    self.get().func
  }

  /// Get the name of the selected backend.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }

  /// Call the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, crc: u32, data: &[u8]) -> u32 {
    (self.get().func)(crc, data)
  }
}
