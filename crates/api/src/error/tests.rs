use super::*;

#[test]
fn test_with_context_keeps_kind() {
    let err = Error::InvalidLength {
        context: "inner",
        expected: 16,
        actual: 15,
    };
    let err = err.with_context("SM4 key");
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "SM4 key",
            expected: 16,
            actual: 15
        }
    );
    assert_eq!(err.context(), "SM4 key");
}

#[test]
fn test_display() {
    let err = Error::InvalidLength {
        context: "SM4 block",
        expected: 16,
        actual: 3,
    };
    assert_eq!(
        err.to_string(),
        "SM4 block: invalid length (expected 16, got 3)"
    );

    let err = Error::AuthenticationFailed {
        context: "SM2 C3",
    };
    assert_eq!(err.to_string(), "Authentication failed: SM2 C3");
}

#[test]
fn test_result_ext() {
    let res: core::result::Result<(), Error> = Err(Error::InvalidPoint { context: "decode" });
    let res = res.with_context("SM2 C1");
    assert_eq!(res, Err(Error::InvalidPoint { context: "SM2 C1" }));

    let res: core::result::Result<(), &str> = Err("raw");
    let res = res.wrap_err(|| Error::Other { context: "wrapped" });
    assert_eq!(res, Err(Error::Other { context: "wrapped" }));
}
