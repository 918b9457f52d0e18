use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serial_test::serial;
use uuid::Uuid;

#[test]
#[serial]
fn given_malformed_user_id_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _user = EnvGuard::set("TF_SESSION_USER_ID", "not-a-uuid");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_session_env_when_load_then_credentials_present() {
    // Given
    let _temp = setup_config_dir();
    let user_id = Uuid::new_v4().to_string();
    let _token = EnvGuard::set("TF_SESSION_TOKEN", "secret-token");
    let _user = EnvGuard::set("TF_SESSION_USER_ID", &user_id);

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.session.token.as_deref(), Some("secret-token"));
    assert_eq!(config.session.user_id.as_deref(), Some(user_id.as_str()));
    assert!(config.session.user_uuid().is_some());
}
