//! Supabase collaborator status.
//!
//! The hosted sync service is opaque to this client: the only capability
//! surfaced is whether it is configured and reachable, shown as a passive
//! indicator on the login page. Nothing here ever blocks login or local
//! functionality.
//!
//! Client-side (hydrate): real HTTP probe via `gloo-net`.
//! Server-side (SSR): stubs reporting unreachable, since the probe is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

/// Compile-time configuration values, injected at build like the original
/// deployment's environment variables.
const SUPABASE_URL: Option<&str> = option_env!("PAPERSLOL_SUPABASE_URL");
const SUPABASE_ANON_KEY: Option<&str> = option_env!("PAPERSLOL_SUPABASE_ANON_KEY");

/// Whether the build carries a Supabase endpoint and anon key.
pub fn is_configured() -> bool {
    matches!(SUPABASE_URL, Some(url) if !url.is_empty())
        && matches!(SUPABASE_ANON_KEY, Some(key) if !key.is_empty())
}

/// Best-effort reachability probe against the auth health endpoint.
/// Returns `false` when unconfigured, off-browser, or on any transport
/// error; the caller only uses this for the status pill.
pub async fn check_reachable() -> bool {
    if !is_configured() {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        let (Some(base), Some(key)) = (SUPABASE_URL, SUPABASE_ANON_KEY) else {
            return false;
        };
        let url = format!("{}/auth/v1/health", base.trim_end_matches('/'));
        match gloo_net::http::Request::get(&url)
            .header("apikey", key)
            .send()
            .await
        {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
