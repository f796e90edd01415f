/// Built-in candidate paths probed on every scan.
pub const DEFAULT_PATHS: [&str; 36] = [
    "/",
    "/admin",
    "/login",
    "/api",
    "/wp-admin",
    "/test",
    "/backup",
    "/config",
    "/env",
    "/internal",
    "/secret",
    "/debug",
    "/console",
    "/manager",
    "/phpmyadmin",
    "/.git",
    "/.env",
    "/.htaccess",
    "/robots.txt",
    "/v1",
    "/v2",
    "/v3",
    "/beta",
    "/staging",
    "/uploads",
    "/images",
    "/assets",
    "/static",
    "/cgi-bin",
    "/bin",
    "/cmd",
    "/shell",
    "/owa",
    "/ecp",
    "/ews",
    "/exchange",
];

/// Owned copy of the built-in list.
pub fn default_paths() -> Vec<String> {
    DEFAULT_PATHS.iter().map(|p| p.to_string()).collect()
}
