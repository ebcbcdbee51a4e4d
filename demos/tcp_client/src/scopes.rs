//! Parameter scopes declared by the demo client.

use coral_config::{
    Configuration, ParamEnum, SchemaAggregate, SchemaAggregateBuilder, config_scope, enum_param,
    f32_param, i32_param, string_param,
};

use crate::error::{Result, TcpClientError};

/// How messages are paced on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ParamEnum)]
pub enum SendStrategy {
    /// Send as fast as the socket accepts.
    Regular,
    /// Pace sends to stay under the server's rate limit.
    Throttled,
}

config_scope! {
    /// Settings shared by every client.
    pub struct MoreConfigs {
        /// Attempts before giving up on a connection.
        MAX_RETRIES: i32 = i32_param().with_default(10).describe("connection attempts"),
        /// Server to connect to.
        SERVER_HOST: String = string_param().with_default("localhost".to_owned()),
        /// Older name for the server address.
        SERVER_IP: String = string_param().alias_of(Self::SERVER_HOST),
    }
}

config_scope! {
    /// Session settings of the base client.
    pub struct Client {
        /// Seconds between heartbeats.
        HEARTBEAT_INTERVAL: i32 = i32_param().with_default(5),
        /// Fractional heartbeat interval from older releases.
        HEARTBEAT: f32 = f32_param().deprecated_in_favor_of(Self::HEARTBEAT_INTERVAL),
        /// User to log in as.
        CLIENT_USERNAME: String = string_param().with_default("testClient".to_owned()),
        /// Short form of the user name.
        USERNAME: String = string_param().alias_of(Self::CLIENT_USERNAME),
    }
}

config_scope! {
    /// Settings of the TCP transport.
    pub struct TcpClient {
        /// Pacing strategy.
        CLIENT_SEND_STRATEGY: SendStrategy =
            enum_param::<SendStrategy>().with_default(SendStrategy::Regular),
        /// Messages sent per session.
        MESSAGES_TO_SEND: i32 = i32_param().with_default(10),
    }
}

/// Names accepted on the command line, in printing order.
pub const SCOPE_NAMES: [&str; 3] = ["TcpClient", "Client", "MoreConfigs"];

fn add_scope(builder: SchemaAggregateBuilder, name: &str) -> Result<SchemaAggregateBuilder> {
    if name.eq_ignore_ascii_case("MoreConfigs") {
        Ok(builder.scope::<MoreConfigs>())
    } else if name.eq_ignore_ascii_case("Client") {
        Ok(builder.scope::<Client>())
    } else if name.eq_ignore_ascii_case("TcpClient") {
        Ok(builder.scope::<TcpClient>())
    } else {
        Err(TcpClientError::UnknownScope(name.to_owned()))
    }
}

/// Aggregate of the named scopes, or of every demo scope when `names` is
/// empty.
///
/// # Errors
///
/// Returns [`TcpClientError::UnknownScope`] for a name outside
/// [`SCOPE_NAMES`] and a configuration error if the scopes are invalid.
pub fn aggregate<S: AsRef<str>>(names: &[S]) -> Result<SchemaAggregate> {
    let mut builder = SchemaAggregate::builder();
    if names.is_empty() {
        for name in SCOPE_NAMES {
            builder = add_scope(builder, name)?;
        }
    } else {
        for name in names {
            builder = add_scope(builder, name.as_ref())?;
        }
    }
    Ok(builder.build()?)
}

/// Defaults the TCP transport prefers over the shared ones.
///
/// # Errors
///
/// Returns a configuration error if `config` lacks the client scopes.
pub fn apply_transport_defaults(config: &Configuration) -> Result<()> {
    config.set_overwritten_default(MoreConfigs::MAX_RETRIES, 22)?;
    config.set_overwritten_default(Client::HEARTBEAT, 5.555)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{SCOPE_NAMES, aggregate};
    use crate::error::TcpClientError;

    #[rstest]
    fn every_scope_by_default() {
        let all = aggregate::<&str>(&[]).expect("demo scopes are valid");
        assert_eq!(all.schemas().len(), SCOPE_NAMES.len());
        assert_eq!(all.all_descriptors().count(), 9);
    }

    #[rstest]
    #[case("client")]
    #[case("TCPCLIENT")]
    fn scope_names_ignore_case(#[case] name: &str) {
        let one = aggregate(&[name]).expect("known scope");
        assert_eq!(one.schemas().len(), 1);
    }

    #[rstest]
    fn unknown_scopes_are_rejected() {
        let err = aggregate(&["Server"]).expect_err("no such scope");
        assert!(matches!(err, TcpClientError::UnknownScope(name) if name == "Server"));
    }
}
