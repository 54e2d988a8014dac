//! Structured fuzzing for the database URL parser.
//!
//! Builds URLs from arbitrary components, percent-encodes them and checks
//! that parsing hands every component back unchanged.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dburl_config::parse;
use libfuzzer_sys::fuzz_target;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// A generated network scheme.
#[derive(Debug, Arbitrary)]
enum FuzzScheme {
    Postgres,
    Postgis,
    Mysql,
    Mssql,
    Oracle,
    Redshift,
}

impl FuzzScheme {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Postgis => "postgis",
            Self::Mysql => "mysql",
            Self::Mssql => "mssql",
            Self::Oracle => "oracle",
            Self::Redshift => "redshift",
        }
    }
}

/// A generated network URL.
#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    scheme: FuzzScheme,
    user: String,
    password: String,
    host: String,
    port: Option<u16>,
    name: String,
}

impl FuzzUrl {
    fn to_url(&self) -> String {
        let mut url = format!("{}://", self.scheme.as_str());
        if !self.user.is_empty() || !self.password.is_empty() {
            url.push_str(&encode(&self.user));
            if !self.password.is_empty() {
                url.push(':');
                url.push_str(&encode(&self.password));
            }
            url.push('@');
        }
        url.push_str(&self.host);
        if let Some(port) = self.port {
            url.push_str(&format!(":{}", port));
        }
        url.push('/');
        url.push_str(&encode(&self.name));
        url
    }

    fn host_is_plain(&self) -> bool {
        !self.host.is_empty()
            && self
                .host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    }
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

fuzz_target!(|input: FuzzUrl| {
    if !input.host_is_plain() || input.port == Some(0) {
        return;
    }

    let config = parse(&input.to_url()).expect("generated URL should parse");
    assert_eq!(config.host, input.host);
    assert_eq!(config.port, input.port);
    assert_eq!(config.name, input.name);
    assert_eq!(config.password, input.password);
    if !input.user.is_empty() {
        assert_eq!(config.user, input.user);
    }
});
