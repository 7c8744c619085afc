pub mod env {
    pub const SUPABASE_URL_ENV_VAR: &str = "SUPABASE_URL";
    pub const SUPABASE_ANON_KEY_ENV_VAR: &str = "SUPABASE_ANON_KEY";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const ALLOWED_ORIGIN_ENV_VAR: &str = "ALLOWED_ORIGIN";
}

pub const TOKEN_TTL_IN_SECONDS: i64 = 3600;

// Used when JWT_SECRET is unset. Anyone who knows it can mint tokens.
pub const INSECURE_DEFAULT_JWT_SECRET: &str = "your-jwt-secret";

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://employee-management-two-xi.vercel.app";

pub mod prod {
    pub const APP_HOST: &str = "0.0.0.0";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
