//! CRC-32/ITU runtime configuration (overrides + thresholds).
//!
//! Selection knobs:
//! - the length at which slice-by-8 takes over from byte-at-a-time
//! - optional forced kernel selection
//!
//! Overrides come from the environment (with `std`) and are read once per
//! process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRC32ITU_FORCE` | `auto`, `reference` / `bitwise`, `bytewise` / `sarwate` / `table`, `slice8` |
//! | `CRC32ITU_THRESHOLD_SLICE8` | minimum length (bytes) for slice-by-8 under `auto` |
//!
//! All kernels compute the same function, so configuration changes speed only.

/// Environment variable selecting a forced kernel.
#[cfg(feature = "std")]
pub const ENV_FORCE: &str = "CRC32ITU_FORCE";
/// Environment variable overriding [`Crc32ItuTunables::bytewise_to_slice8`].
#[cfg(feature = "std")]
pub const ENV_THRESHOLD_SLICE8: &str = "CRC32ITU_THRESHOLD_SLICE8";

/// Default length at which slice-by-8 beats the single-table loop.
pub const DEFAULT_BYTEWISE_TO_SLICE8: usize = 64;

/// Forced kernel selection for CRC-32/ITU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc32ItuForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the bit-at-a-time reference kernel.
  Reference,
  /// Force the byte-at-a-time (Sarwate) kernel.
  Bytewise,
  /// Force the slice-by-8 kernel.
  Slice8,
}

impl Crc32ItuForce {
  /// Canonical lowercase name, accepted back by [`parse`](Self::parse).
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse a force mode (case-insensitive, surrounding whitespace ignored).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("sarwate")
      || value.eq_ignore_ascii_case("table")
    {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-by-8") {
      return Some(Self::Slice8);
    }
    None
  }
}

/// CRC-32/ITU selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32ItuTunables {
  /// Minimum `len` in bytes to use slice-by-8 (otherwise byte-at-a-time).
  pub bytewise_to_slice8: usize,
}

impl Default for Crc32ItuTunables {
  fn default() -> Self {
    Self { bytewise_to_slice8: DEFAULT_BYTEWISE_TO_SLICE8 }
  }
}

/// Full CRC-32/ITU runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc32ItuConfig {
  /// Requested force mode.
  pub requested_force: Crc32ItuForce,
  /// Force mode actually applied. Every kernel is portable, so this always
  /// equals the request; it is kept separate for parity with accelerated CRCs.
  pub effective_force: Crc32ItuForce,
  /// Thresholds used by the auto selector.
  pub tunables: Crc32ItuTunables,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: Crc32ItuForce,
  bytewise_to_slice8: Option<usize>,
}

#[cfg(feature = "std")]
fn read_overrides(lookup: impl Fn(&str) -> Option<std::string::String>) -> Overrides {
  let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

  let force = var(ENV_FORCE).and_then(|value| {
    let parsed = Crc32ItuForce::parse(&value);
    if parsed.is_none() {
      log::warn!("ignoring {ENV_FORCE}={value:?}: expected auto, reference, bytewise or slice8");
    }
    parsed
  });

  let bytewise_to_slice8 = var(ENV_THRESHOLD_SLICE8).and_then(|value| match value.trim().parse::<usize>() {
    Ok(v) => Some(v),
    Err(err) => {
      log::warn!("ignoring {ENV_THRESHOLD_SLICE8}={value:?}: {err}");
      None
    }
  });

  Overrides { force: force.unwrap_or_default(), bytewise_to_slice8 }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  read_overrides(|name| std::env::var(name).ok())
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn resolve(ov: Overrides) -> Crc32ItuConfig {
  let mut tunables = Crc32ItuTunables::default();
  if let Some(v) = ov.bytewise_to_slice8 {
    tunables.bytewise_to_slice8 = v;
  }

  Crc32ItuConfig { requested_force: ov.force, effective_force: ov.force, tunables }
}

/// Get the effective CRC-32/ITU configuration for this process.
#[inline]
#[must_use]
pub fn get() -> Crc32ItuConfig {
  resolve(overrides())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(Crc32ItuForce::parse("auto"), Some(Crc32ItuForce::Auto));
    assert_eq!(Crc32ItuForce::parse(" BITWISE "), Some(Crc32ItuForce::Reference));
    assert_eq!(Crc32ItuForce::parse("Sarwate"), Some(Crc32ItuForce::Bytewise));
    assert_eq!(Crc32ItuForce::parse("table"), Some(Crc32ItuForce::Bytewise));
    assert_eq!(Crc32ItuForce::parse("slice-by-8"), Some(Crc32ItuForce::Slice8));
    assert_eq!(Crc32ItuForce::parse("pclmul"), None);
    assert_eq!(Crc32ItuForce::parse(""), None);
  }

  #[test]
  fn as_str_round_trips() {
    for force in [Crc32ItuForce::Auto, Crc32ItuForce::Reference, Crc32ItuForce::Bytewise, Crc32ItuForce::Slice8] {
      assert_eq!(Crc32ItuForce::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn resolve_defaults() {
    let cfg = resolve(Overrides::default());
    assert_eq!(cfg.requested_force, Crc32ItuForce::Auto);
    assert_eq!(cfg.effective_force, Crc32ItuForce::Auto);
    assert_eq!(cfg.tunables.bytewise_to_slice8, DEFAULT_BYTEWISE_TO_SLICE8);
  }

  #[test]
  fn resolve_applies_overrides() {
    let cfg = resolve(Overrides { force: Crc32ItuForce::Slice8, bytewise_to_slice8: Some(0) });
    assert_eq!(cfg.effective_force, Crc32ItuForce::Slice8);
    assert_eq!(cfg.tunables.bytewise_to_slice8, 0);
  }

  #[cfg(feature = "std")]
  mod env {
    use std::{
      string::{String, ToString},
      vec::Vec,
    };

    use super::*;

    fn read(vars: &[(&str, &str)]) -> Overrides {
      read_overrides(|name| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string()))
    }

    #[test]
    fn unset_is_default() {
      assert_eq!(read(&[]), Overrides::default());
      assert_eq!(resolve(read(&[])), Crc32ItuConfig::default());
    }

    #[test]
    fn force_alias_selects_reference() {
      let ov = read(&[(ENV_FORCE, "bitwise")]);
      assert_eq!(ov.force, Crc32ItuForce::Reference);
      assert_eq!(resolve(ov).effective_force, Crc32ItuForce::Reference);
    }

    #[test]
    fn unknown_force_falls_back_to_auto() {
      assert_eq!(read(&[(ENV_FORCE, "pclmul")]).force, Crc32ItuForce::Auto);
    }

    #[test]
    fn blank_values_are_unset() {
      assert_eq!(read(&[(ENV_FORCE, "   "), (ENV_THRESHOLD_SLICE8, "")]), Overrides::default());
    }

    #[test]
    fn threshold_parses_and_rejects_garbage() {
      let ov = read(&[(ENV_THRESHOLD_SLICE8, " 128 ")]);
      assert_eq!(resolve(ov).tunables.bytewise_to_slice8, 128);

      let ov = read(&[(ENV_THRESHOLD_SLICE8, "abc")]);
      assert_eq!(ov.bytewise_to_slice8, None);
      assert_eq!(resolve(ov).tunables.bytewise_to_slice8, DEFAULT_BYTEWISE_TO_SLICE8);
    }

    #[test]
    fn lookup_sees_both_variables() {
      let seen = core::cell::RefCell::new(Vec::<String>::new());
      let _ = read_overrides(|name| {
        seen.borrow_mut().push(name.to_string());
        None
      });
      assert_eq!(*seen.borrow(), [ENV_FORCE, ENV_THRESHOLD_SLICE8]);
    }
  }
}
