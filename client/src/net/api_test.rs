use super::*;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn login_status_error_maps_rejections_to_invalid_credentials() {
    assert_eq!(login_status_error(401), AuthError::InvalidCredentials);
    assert_eq!(login_status_error(400), AuthError::InvalidCredentials);
    assert_eq!(login_status_error(503), AuthError::Network("status 503".to_owned()));
}

#[test]
fn http_api_uses_configured_endpoints() {
    let api = HttpAuthApi::new(ClientConfig::default());
    assert_eq!(api.config().endpoint(LOGIN_PATH), "/api/auth/login");
    assert_eq!(api.config().endpoint(PROFILE_PATH), "/api/auth/profile");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_the_browser() {
    let api = HttpAuthApi::default();
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(futures::executor::block_on(api.login(&request)), Err(AuthError::Unavailable));
    assert_eq!(futures::executor::block_on(api.get_profile(None)), Err(ApiError::Unavailable));
    futures::executor::block_on(api.logout(None));
}
