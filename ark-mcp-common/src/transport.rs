//! MCP transport selection.
//!
//! Two transports are supported:
//!
//! - **Stdio**: default; the host agent spawns the server as a subprocess and
//!   speaks line-delimited JSON-RPC over stdin/stdout
//! - **HTTP**: streamable HTTP transport served at `/mcp`
//!
//! # Example
//!
//! ```ignore
//! use ark_mcp_common::transport::TransportArgs;
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct Args {
//!     #[command(flatten)]
//!     transport: TransportArgs,
//! }
//!
//! let transport = Args::parse().transport.into_transport()?;
//! ```

use crate::error::ConfigError;
use clap::{Args, ValueEnum};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port for the HTTP transport.
pub const DEFAULT_PORT: u16 = 8080;

/// Resolved transport for an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Standard input/output transport.
    #[default]
    Stdio,
    /// Streamable HTTP transport bound to `addr`.
    Http {
        /// Socket address to listen on
        addr: SocketAddr,
    },
}

impl Transport {
    /// Create a new stdio transport.
    pub fn stdio() -> Self {
        Transport::Stdio
    }

    /// Create an HTTP transport on the loopback interface.
    pub fn http(port: u16) -> Self {
        Transport::Http {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port),
        }
    }

    /// Check if this is a stdio transport.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Transport::Stdio)
    }

    /// Get the listen address for network transports.
    pub fn addr(&self) -> Option<SocketAddr> {
        match self {
            Transport::Stdio => None,
            Transport::Http { addr } => Some(*addr),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http { addr } => write!(f, "http ({})", addr),
        }
    }
}

/// Transport mode as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TransportMode {
    #[default]
    Stdio,
    Http,
}

/// Command-line arguments for transport configuration.
#[derive(Args, Debug, Clone)]
pub struct TransportArgs {
    /// Transport mode
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio, ignore_case = true)]
    pub transport: TransportMode,

    /// Interface to bind in HTTP mode
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind in HTTP mode
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl TransportArgs {
    /// Convert command-line arguments into a Transport.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if `--host` is not an IP address.
    pub fn into_transport(self) -> Result<Transport, ConfigError> {
        match self.transport {
            TransportMode::Stdio => Ok(Transport::Stdio),
            TransportMode::Http => {
                let ip: IpAddr = self.host.parse().map_err(|_| {
                    ConfigError::invalid_value(
                        "HOST",
                        format!("'{}' is not an IP address", self.host),
                    )
                })?;
                Ok(Transport::Http {
                    addr: SocketAddr::new(ip, self.port),
                })
            }
        }
    }
}

impl Default for TransportArgs {
    fn default() -> Self {
        Self {
            transport: TransportMode::Stdio,
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
