use axum::response::Redirect;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_cookies::{Cookie, Cookies};
use tracing::warn;

#[derive(Deserialize)]
struct ValuedMessage<T> {
    #[serde(rename = "_")]
    value: T,
}

#[derive(Serialize)]
struct ValuedMessageRef<'a, T> {
    #[serde(rename = "_")]
    value: &'a T,
}

const FLASH_COOKIE_NAME: &str = "_flash";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FlashData {
    pub kind: String,
    pub message: String,
}

impl FlashData {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_owned(),
            message: message.into(),
        }
    }
}

/// Reads the pending flash message and clears it, so it shows once.
pub fn take_flash_cookie<T>(cookies: &Cookies) -> Option<T>
where
    T: DeserializeOwned,
{
    let value = cookies.get(FLASH_COOKIE_NAME).and_then(|flash_cookie| {
        if let Ok(ValuedMessage::<T> { value }) = serde_json::from_str(flash_cookie.value()) {
            Some(value)
        } else {
            None
        }
    })?;

    let mut removal = Cookie::from(FLASH_COOKIE_NAME);
    removal.set_path("/");
    cookies.remove(removal);

    Some(value)
}

/// Stores `data` for the next page and redirects there with `303 See Other`.
pub fn redirect_with_flash<T>(cookies: &Cookies, data: T, location: &str) -> Redirect
where
    T: Serialize,
{
    let valued_message_ref = ValuedMessageRef { value: &data };

    match serde_json::to_string(&valued_message_ref) {
        Ok(value) => {
            let mut cookie = Cookie::new(FLASH_COOKIE_NAME, value);
            cookie.set_path("/");
            cookies.add(cookie);
        }
        Err(err) => warn!(error = %err, "could not encode flash message"),
    }

    Redirect::to(location)
}
