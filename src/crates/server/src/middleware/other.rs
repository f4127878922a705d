use actix_cors::Cors;

/// CORS for the single configured frontend origin; the listing pages send
/// the session cookie, so credentials stay enabled.
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
