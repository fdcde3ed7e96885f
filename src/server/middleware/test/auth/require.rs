use super::*;

/// Tests a request carrying a valid token.
///
/// Expected: Ok(AuthUser) with the token subject
#[test]
fn accepts_valid_token() {
    let keys = JwtKeys::new("secret", 3600);
    let headers = bearer(&keys.issue(3, "amo").unwrap());

    let user = AuthGuard::new(&keys, &headers).require().unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.username, "amo");
}

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let keys = JwtKeys::new("secret", 3600);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));
}

/// Tests the scheme written in other letter cases.
///
/// Expected: Ok(AuthUser) for every spelling
#[test]
fn accepts_scheme_in_any_case() {
    let keys = JwtKeys::new("secret", 3600);
    let token = keys.issue(3, "amo").unwrap();

    for scheme in ["bearer", "BEARER", "BeArEr"] {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("{} {}", scheme, token)).unwrap(),
        );

        let user = AuthGuard::new(&keys, &headers).require().unwrap();

        assert_eq!(user.id, 3);
    }
}

/// Tests headers that are not bearer tokens.
///
/// Expected: Err(AuthError::MalformedHeader)
#[test]
fn rejects_malformed_header() {
    let keys = JwtKeys::new("secret", 3600);

    for value in ["Basic YW1vOnJpeg==", "Bearer ", "token-without-scheme"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = AuthGuard::new(&keys, &headers).require();

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MalformedHeader))),
            "accepted {:?}",
            value
        );
    }
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_signature() {
    let keys = JwtKeys::new("secret", 3600);
    let forged = JwtKeys::new("attacker", 3600).issue(1, "amo").unwrap();
    let headers = bearer(&forged);

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let keys = JwtKeys::new("secret", -3600);
    let headers = bearer(&keys.issue(1, "amo").unwrap());

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));
}
