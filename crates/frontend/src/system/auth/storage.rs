use contracts::system::auth::Session;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "vendor_access_token";
const SESSION_KEY: &str = "vendor_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Log line for a failed localStorage write or removal
fn storage_warning(action: &str, key: &str, err: impl std::fmt::Debug) -> String {
    format!("cannot {action} {key} in localStorage: {err:?}")
}

fn write(storage: &web_sys::Storage, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        log::warn!("{}", storage_warning("write", key, e));
    }
}

fn remove(storage: &web_sys::Storage, key: &str) {
    if let Err(e) = storage.remove_item(key) {
        log::warn!("{}", storage_warning("remove", key, e));
    }
}

/// Save token and user JSON to localStorage
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    write(&storage, ACCESS_TOKEN_KEY, &session.access_token);
    match serde_json::to_string(session) {
        Ok(json) => write(&storage, SESSION_KEY, &json),
        Err(e) => log::error!("cannot store session: {e}"),
    }
}

/// Restore the session; a broken user JSON counts as no session
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str::<Session>(&json) {
        Ok(session) if !session.access_token.is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("stored session is unreadable: {e}");
            clear_session();
            None
        }
    }
}

/// Get access token from localStorage
pub fn access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        remove(&storage, ACCESS_TOKEN_KEY);
        remove(&storage, SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_names_action_and_key() {
        assert_eq!(
            storage_warning("write", SESSION_KEY, "QuotaExceededError"),
            "cannot write vendor_session in localStorage: \"QuotaExceededError\""
        );
    }
}
