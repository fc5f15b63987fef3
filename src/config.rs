/// Hosted-table endpoint configuration, baked into the build.
///
/// Both values must be present at compile time for the booking form to reach
/// the backend. An unconfigured build still renders the whole site; the
/// submission controller fails fast with a configuration notice instead of
/// attempting the request.
pub struct SupabaseConfig {
    pub url: &'static str,
    pub anon_key: &'static str,
}

pub fn supabase() -> Option<SupabaseConfig> {
    match (option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY")) {
        (Some(url), Some(anon_key)) if !url.is_empty() && !anon_key.is_empty() => {
            Some(SupabaseConfig { url, anon_key })
        }
        _ => None,
    }
}
