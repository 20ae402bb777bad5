//! Catalog configuration loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8051;

/// Listener settings for the catalog app.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    pub port: Option<u16>,
}

impl CatalogSettings {
    /// Socket address for the listener, falling back to `127.0.0.1:8051`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, "127.0.0.1:8051")]
    #[case(Some("0.0.0.0"), None, "0.0.0.0:8051")]
    #[case(None, Some("9100"), "127.0.0.1:9100")]
    fn bind_addr_follows_environment(
        #[case] host: Option<&str>,
        #[case] port: Option<&str>,
        #[case] expected: &str,
    ) {
        let _guard = lock_env([
            ("CATALOG_HOST", host.map(str::to_owned)),
            ("CATALOG_PORT", port.map(str::to_owned)),
        ]);

        let settings = CatalogSettings::load_from_iter([OsString::from("rentitease-catalog")])
            .expect("config should load");
        assert_eq!(settings.bind_addr(), expected.parse().expect("addr"));
    }
}
