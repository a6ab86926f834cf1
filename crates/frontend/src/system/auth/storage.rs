use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

const ACCESS_TOKEN_COOKIE: &str = "token";
const REFRESH_TOKEN_COOKIE: &str = "refresh";

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Value of `name` in a `document.cookie` string
fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn cookie_line(name: &str, value: &str, max_age: Option<u32>) -> String {
    let mut line = format!("{}={}; path=/; SameSite=Lax", name, urlencoding::encode(value));
    if let Some(seconds) = max_age {
        line.push_str(&format!("; max-age={}", seconds));
    }
    line
}

fn read_cookie(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    find_cookie(&cookies, name)
}

fn write_cookie(line: &str) {
    if let Some(document) = html_document() {
        if document.set_cookie(line).is_err() {
            log::error!("Failed to write cookie");
        }
    }
}

pub fn save_access_token(token: &str) {
    write_cookie(&cookie_line(ACCESS_TOKEN_COOKIE, token, None));
}

pub fn get_access_token() -> Option<String> {
    read_cookie(ACCESS_TOKEN_COOKIE)
}

pub fn save_refresh_token(token: &str) {
    write_cookie(&cookie_line(REFRESH_TOKEN_COOKIE, token, None));
}

pub fn get_refresh_token() -> Option<String> {
    read_cookie(REFRESH_TOKEN_COOKIE)
}

pub fn clear_tokens() {
    write_cookie(&cookie_line(ACCESS_TOKEN_COOKIE, "", Some(0)));
    write_cookie(&cookie_line(REFRESH_TOKEN_COOKIE, "", Some(0)));
}
