//! Build metadata published by the log unit
//!
//! The facts here are immutable for the lifetime of the process. The
//! default source is the build script, which bakes them in as
//! compile-time environment variables; embedders that compute their own
//! facts construct a [`BuildInfo`] directly.

use crate::schema;

/// Read-only build/version facts captured when the crate was compiled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    build_number: i64,
    host: String,
    date: String,
    commit: String,
    compiler: String,
    build_system: String,
}

impl BuildInfo {
    /// Build metadata with the given version and build number; the other
    /// fields default to `unknown` and are filled in with the `with_*`
    /// builders.
    pub fn new(version: impl Into<String>, build_number: i64) -> Self {
        Self {
            version: version.into(),
            build_number,
            host: "unknown".to_string(),
            date: "unknown".to_string(),
            commit: "unknown".to_string(),
            compiler: "unknown".to_string(),
            build_system: "unknown".to_string(),
        }
    }

    /// The facts the build script baked into this binary
    pub fn from_build_env() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_number: option_env!("EMBERLOG_BUILD_NUMBER")
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
            host: option_env!("EMBERLOG_BUILD_HOST")
                .unwrap_or("unknown")
                .to_string(),
            date: option_env!("EMBERLOG_BUILD_DATE")
                .unwrap_or("unknown")
                .to_string(),
            commit: option_env!("EMBERLOG_GIT_COMMIT")
                .unwrap_or("unknown")
                .to_string(),
            compiler: option_env!("EMBERLOG_RUSTC_VERSION")
                .unwrap_or("unknown")
                .to_string(),
            build_system: option_env!("EMBERLOG_BUILD_SYSTEM")
                .unwrap_or("cargo")
                .to_string(),
        }
    }

    /// Set the machine the build ran on
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the build date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the source commit
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    /// Set the compiler identity
    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Set the build-system identity
    pub fn with_build_system(mut self, build_system: impl Into<String>) -> Self {
        self.build_system = build_system.into();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_number(&self) -> i64 {
        self.build_number
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn build_system_id(&self) -> &str {
        &self.build_system
    }

    /// The combined summary string, one `name=value` line per field
    pub fn summary(&self) -> String {
        format!(
            "{}={}\n{}={}\n{}={}\n{}={}\n{}={}\n{}={}\n{}={}",
            schema::CONST_VERSION,
            self.version,
            schema::CONST_BUILD_NUMBER,
            self.build_number,
            schema::CONST_HOST,
            self.host,
            schema::CONST_DATE,
            self.date,
            schema::CONST_COMMIT,
            self.commit,
            schema::CONST_COMPILER,
            self.compiler,
            schema::CONST_BUILD_SYSTEM,
            self.build_system,
        )
    }
}
