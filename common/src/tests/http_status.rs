use crate::HttpStatusCode;

/// **VALUE**: Verifies the 2xx window used to decide success.
///
/// **WHY THIS MATTERS**: Backlog answers 200, 201 and 204 depending on the
/// endpoint. Anything in 200..=299 is success; 199 and 300 are not.
///
/// **BUG THIS CATCHES**: Off-by-one range bounds in `is_success`.
#[test]
fn given_boundary_codes_when_checking_success_then_only_2xx_pass() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());
}

#[test]
fn given_raw_code_when_converted_then_displays_bare_number() {
    let forbidden = HttpStatusCode::from(403);

    assert!(!forbidden.is_success());
    assert_eq!(forbidden.to_string(), "403");
}
