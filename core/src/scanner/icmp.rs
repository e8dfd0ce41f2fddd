//! ICMP echo prober built on `surge-ping`.
//!
//! One socket is opened per prober and shared by every probe. Depending on
//! the platform and privileges this is a raw or an unprivileged datagram
//! socket; when neither can be opened every probe reports
//! [`ProbeError::Unavailable`].

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError};
use tracing::warn;
use winhelper_common::error::ProbeError;

use super::Prober;

const PAYLOAD: [u8; 56] = [0; 56];

pub struct IcmpProber {
    client: Option<Client>,
    timeout: Duration,
}

impl IcmpProber {
    pub fn new(timeout: Duration) -> Self {
        let client = match Client::new(&Config::default()) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("ICMP socket unavailable, hosts will be reported absent: {e}");
                None
            }
        };

        Self { client, timeout }
    }
}

#[async_trait]
impl Prober for IcmpProber {
    async fn probe(&self, target: Ipv4Addr) -> Result<(), ProbeError> {
        let client = self.client.as_ref().ok_or(ProbeError::Unavailable)?;

        let mut pinger = client
            .pinger(IpAddr::V4(target), PingIdentifier(rand::random()))
            .await;
        pinger.timeout(self.timeout);

        match pinger.ping(PingSequence(0), &PAYLOAD).await {
            Ok(_) => Ok(()),
            Err(SurgeError::Timeout { .. }) => Err(ProbeError::Timeout),
            Err(e) => Err(ProbeError::Icmp(e.to_string())),
        }
    }
}
