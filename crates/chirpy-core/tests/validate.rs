//! Chirp validation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chirpy_core::error::{ChirpyError, TOO_LONG_MSG};
use chirpy_core::{ChirpValidator, ProfanityFilter};

#[test]
fn limit_is_inclusive() {
    let v = ChirpValidator::default();
    let ok = "a".repeat(140);
    assert_eq!(v.validate(&ok).unwrap().cleaned_body, ok);

    let err = v.validate(&"a".repeat(141)).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CHIRP_TOO_LONG");
    assert_eq!(err.client_message(), TOO_LONG_MSG);
}

#[test]
fn length_counts_bytes_before_filtering() {
    let v = ChirpValidator::new(ProfanityFilter::default(), 9);
    // "kerfuffle" is 9 bytes; the mask would fit even if it were not.
    assert_eq!(v.validate("kerfuffle").unwrap().cleaned_body, "****");
    assert!(matches!(
        v.validate("kerfuffle!"),
        Err(ChirpyError::ChirpTooLong { len: 10, max: 9 })
    ));
    // 5 chars, 10 bytes
    assert!(v.validate("ééééé").is_err());
}
