//! JSON and multipart calls to the backend, all failing with [`ApiError`].

use super::api_utils::api_url;
use contracts::shared::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !ok {
        return Err(ApiError::from_status(status, &text));
    }

    Ok(serde_json::from_str(&text)?)
}

/// `GET {api_base}{path}` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// `POST {api_base}{path}` with a JSON body
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// Status and body of a multipart upload, left for the caller to interpret
#[derive(Debug, Clone)]
pub struct UploadReply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

/// Posts `file` as multipart form data under `field`
pub async fn post_multipart(
    path: &str,
    field: &str,
    file: &web_sys::File,
) -> Result<UploadReply, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, RequestInit, RequestMode};

    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));

    let form_data = FormData::new().map_err(js_err)?;
    form_data.append_with_blob(field, file).map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request =
        web_sys::Request::new_with_str_and_init(&api_url(path), &opts).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            ApiError::Network(
                e.dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
                    .unwrap_or_else(|| format!("{e:?}")),
            )
        })?;
    let resp: web_sys::Response = resp_value.dyn_into().map_err(js_err)?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    Ok(UploadReply {
        ok: resp.ok(),
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Opens a backend URL (file download) in a new browsing context
pub fn open_in_new_tab(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(&api_url(path), "_blank") {
        log::error!("failed to open {}: {:?}", path, e);
    }
}
