use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub type SharedConfig = Arc<Config>;

const DEFAULT_UPSTREAM: &str = "http://192.168.1.4/";
const DEFAULT_PORT: u16 = 4567;

/// Static relay configuration. Every field may be omitted from the JSON file, in which case the
/// value from [`Config::default`] is used.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the relay HTTP listener binds.
    pub bind_addr: SocketAddr,
    /// Base URL of the upstream device. Forwarded path segments are appended to it.
    pub upstream: Url,
    /// Static HTML page served for `GET /`.
    pub dashboard_path: PathBuf,
    /// Upper bound for a single upstream exchange, also used as the connect timeout.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub upstream_timeout: Duration,
    /// Upper bound for handling one inbound request end to end.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            upstream: Url::parse(DEFAULT_UPSTREAM).expect("default upstream URL is valid"),
            dashboard_path: PathBuf::from("dash.html"),
            upstream_timeout: Duration::from_secs(5),
            api_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load and validate a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be opened, [`Error::InvalidJSON`] if its content
    /// doesn't describe a `Config` and [`Error::UnsupportedUpstreamScheme`] if the upstream isn't
    /// a plain `http` URL.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.upstream_is_supported()?;
        Ok(conf)
    }

    fn upstream_is_supported(&self) -> Result<(), Error> {
        match self.upstream.scheme() {
            "http" => Ok(()),
            other => Err(Error::UnsupportedUpstreamScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pumpdash-{}-{name}.json", std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_match_hardcoded_relay() {
        let conf = Config::default();
        assert_eq!(conf.bind_addr, "127.0.0.1:4567".parse().unwrap());
        assert_eq!(conf.upstream.as_str(), "http://192.168.1.4/");
        assert_eq!(conf.dashboard_path, PathBuf::from("dash.html"));
        assert_eq!(conf.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = write_config(
            "partial",
            r#"{"upstream": "http://10.0.0.7:8080/", "upstream_timeout": 2}"#,
        );
        let conf = Config::try_from_file(&path).unwrap();
        assert_eq!(conf.upstream.as_str(), "http://10.0.0.7:8080/");
        assert_eq!(conf.upstream_timeout, Duration::from_secs(2));
        assert_eq!(conf.bind_addr, Config::default().bind_addr);
        assert_eq!(conf.api_timeout, Duration::from_secs(30));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_https_upstream() {
        let path = write_config("https", r#"{"upstream": "https://device.local/"}"#);
        let err = Config::try_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedUpstreamScheme(s) if s == "https"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_unknown_fields() {
        let path = write_config("unknown", r#"{"upstream_host": "192.168.1.4"}"#);
        assert!(matches!(
            Config::try_from_file(&path),
            Err(Error::InvalidJSON(_))
        ));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Config::try_from_file("/nonexistent/pumpdash.json"),
            Err(Error::IO(_))
        ));
    }
}
