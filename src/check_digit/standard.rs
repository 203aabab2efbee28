//! Shared instances of every check-digit algorithm, with lookup by name.
//!
//! # Example
//!
//! ```
//! use contract_checks::{CheckDigitAlgorithm, check_digit::standard};
//!
//! assert!(standard::LUHN.validate("4111111111111111"));
//! let isbn = standard::by_name("ISBN-10").unwrap();
//! assert!(isbn.validate("0306406152"));
//! ```

use std::sync::LazyLock;

use super::{
    AbaRoutingNumber, CheckDigitAlgorithm, CheckDigitCalculator, Isbn10, Luhn, Mod10Barcode, Npi,
    VehicleIdentificationNumber, Verhoeff,
};

#[cfg(feature = "rustc-hash")]
type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "rustc-hash"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;

/// Luhn algorithm.
pub static LUHN: Luhn = Luhn;
/// Verhoeff algorithm.
pub static VERHOEFF: Verhoeff = Verhoeff;
/// ISBN-10 algorithm.
pub static ISBN10: Isbn10 = Isbn10;
/// ABA routing number algorithm.
pub static ABA_ROUTING_NUMBER: AbaRoutingNumber = AbaRoutingNumber;
/// Mod 10 barcode algorithm.
pub static MOD10_BARCODE: Mod10Barcode = Mod10Barcode;
/// National Provider Identifier algorithm.
pub static NPI: Npi = Npi;
/// Vehicle identification number algorithm.
pub static VEHICLE_IDENTIFICATION_NUMBER: VehicleIdentificationNumber =
    VehicleIdentificationNumber;

static ALL: [&dyn CheckDigitAlgorithm; 7] = [
    &LUHN,
    &VERHOEFF,
    &ISBN10,
    &ABA_ROUTING_NUMBER,
    &MOD10_BARCODE,
    &NPI,
    &VEHICLE_IDENTIFICATION_NUMBER,
];

static CALCULATORS: [&dyn CheckDigitCalculator; 2] = [&LUHN, &NPI];

static BY_NAME: LazyLock<HashMap<&'static str, &'static dyn CheckDigitAlgorithm>> =
    LazyLock::new(|| {
        let map: HashMap<_, _> = ALL.iter().map(|&alg| (alg.name(), alg)).collect();
        tracing::debug!(count = map.len(), "registered standard check digit algorithms");
        map
    });

/// Returns every standard algorithm.
pub fn all() -> &'static [&'static dyn CheckDigitAlgorithm] {
    &ALL
}

/// Returns the standard algorithm whose [`CheckDigitAlgorithm::name()`] is
/// exactly `name`.
pub fn by_name(name: &str) -> Option<&'static dyn CheckDigitAlgorithm> {
    let found = BY_NAME.get(name).copied();
    if found.is_none() {
        tracing::trace!(name, "no standard check digit algorithm with this name");
    }
    found
}

/// Returns the standard algorithm named `name` if it can compute check
/// digits.
pub fn calculator_by_name(name: &str) -> Option<&'static dyn CheckDigitCalculator> {
    CALCULATORS.iter().copied().find(|calc| calc.name() == name)
}
