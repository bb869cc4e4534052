//! The contact form's remote delivery collaborator: the EmailJS browser SDK.
//!
//! The SDK arrives via a CDN `<script>` tag and hangs off `window.emailjs`,
//! so it can load after us or not at all. Readiness is surfaced as a signal
//! fed by a fixed 1000 ms poll instead of an ambient lookup at send time;
//! the form decides what to do when the collaborator never shows up.

use leptos::prelude::*;

use crate::contact::{ContactFields, DeliveryError, DeliveryResponse};

pub const OWNER_EMAIL: &str = "indugundam2004@gmail.com";
pub const PUBLIC_KEY: &str = "LDQdivLXpW4QOuPBp";
pub const SERVICE_ID: &str = "service_portfolio";
pub const TEMPLATE_ID: &str = "template_portfolio";

/// How often to re-check for the SDK global while the script loads.
pub const INIT_POLL_MS: u64 = 1000;

/// Polls for the SDK global, initializes it with the account key once it
/// appears, and reports readiness. Server renders never become ready.
pub fn use_delivery_ready() -> Signal<bool> {
    let (ready, set_ready) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

        let Pausable { pause, .. } = use_interval_fn_with_options(
            move || {
                if let Some(client) = sdk::global() {
                    client.init(PUBLIC_KEY);
                    set_ready.set(true);
                }
            },
            INIT_POLL_MS,
            UseIntervalFnOptions::default()
                .immediate(true)
                .immediate_callback(true),
        );
        Effect::new(move |_| {
            if ready.get() {
                pause();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_ready;

    ready.into()
}

/// Makes exactly one delivery attempt through the SDK. Absence of the
/// global, a rejected promise, or a malformed response all surface as
/// errors; only a 200 response counts as delivered.
pub async fn send_message(fields: &ContactFields) -> Result<DeliveryResponse, DeliveryError> {
    #[cfg(feature = "hydrate")]
    {
        sdk::send(fields).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(DeliveryError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
mod sdk {
    use serde::Serialize;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::contact::{ContactFields, DeliveryError, DeliveryResponse};

    #[wasm_bindgen]
    extern "C" {
        /// The `window.emailjs` SDK object.
        pub type EmailJs;

        #[wasm_bindgen(method)]
        pub fn init(this: &EmailJs, public_key: &str);

        #[wasm_bindgen(method, catch, js_name = send)]
        async fn send_raw(
            this: &EmailJs,
            service_id: &str,
            template_id: &str,
            params: &JsValue,
        ) -> Result<JsValue, JsValue>;
    }

    /// Variables the EmailJS template interpolates.
    #[derive(Serialize)]
    struct TemplateParams<'a> {
        from_name: &'a str,
        from_email: &'a str,
        message: &'a str,
        to_email: &'a str,
    }

    pub fn global() -> Option<EmailJs> {
        let value =
            js_sys::Reflect::get(&leptos::prelude::window(), &JsValue::from_str("emailjs")).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value.unchecked_into())
        }
    }

    pub async fn send(fields: &ContactFields) -> Result<DeliveryResponse, DeliveryError> {
        let client = global().ok_or(DeliveryError::Unavailable)?;
        let params = TemplateParams {
            from_name: &fields.name,
            from_email: &fields.email,
            message: &fields.message,
            to_email: super::OWNER_EMAIL,
        };
        let json =
            serde_json::to_string(&params).map_err(|e| DeliveryError::Failed(e.to_string()))?;
        let params =
            js_sys::JSON::parse(&json).map_err(|e| DeliveryError::Failed(error_text(&e)))?;

        let res = client
            .send_raw(super::SERVICE_ID, super::TEMPLATE_ID, &params)
            .await
            .map_err(|e| DeliveryError::Failed(error_text(&e)))?;

        Ok(DeliveryResponse {
            status: number_field(&res, "status") as u16,
            text: string_field(&res, "text"),
        })
    }

    fn number_field(value: &JsValue, key: &str) -> f64 {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn string_field(value: &JsValue, key: &str) -> String {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn error_text(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}
