use crate::{Config, SessionFile};
use crate::tests::setup_config_dir;

use serial_test::serial;
use uuid::Uuid;

#[test]
#[serial]
fn given_written_session_file_when_read_then_round_trips() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let user_id = Uuid::new_v4();
    let session = SessionFile::new("tok-123".to_string(), user_id);

    // When
    session.write_to(temp.path()).unwrap();
    let read = SessionFile::read_from(temp.path()).unwrap();

    // Then
    let read = read.unwrap();
    assert_eq!(read.token, "tok-123");
    assert_eq!(read.user_id, user_id);
}

#[test]
#[serial]
fn given_no_session_file_when_read_then_none() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let read = SessionFile::read_from(temp.path()).unwrap();

    // Then
    assert!(read.is_none());
}

#[test]
#[serial]
fn given_session_file_when_load_config_then_session_merged() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let user_id = Uuid::new_v4();
    SessionFile::new("tok-456".to_string(), user_id)
        .write_to(temp.path())
        .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.session.token.as_deref(), Some("tok-456"));
    assert_eq!(
        config.session.user_id.as_deref(),
        Some(user_id.to_string().as_str())
    );
}

#[test]
#[serial]
fn given_cleared_session_when_read_then_none() {
    // Given
    let (temp, _guard) = setup_config_dir();
    SessionFile::new("tok-789".to_string(), Uuid::new_v4())
        .write_to(temp.path())
        .unwrap();

    // When
    SessionFile::clear_from(temp.path()).unwrap();

    // Then
    assert!(SessionFile::read_from(temp.path()).unwrap().is_none());
}
