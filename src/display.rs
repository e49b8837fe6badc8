use errors::MonitorError;
use signal::SignalState;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayEndpoint {
    pub host: String,
    pub port: u16,
}

/// Fires control datagrams at the tree. Nothing is ever read back.
pub struct DisplaySender {
    endpoint: DisplayEndpoint,
}

impl DisplaySender {
    pub fn new(endpoint: DisplayEndpoint) -> DisplaySender {
        DisplaySender { endpoint: endpoint }
    }

    pub fn endpoint(&self) -> &DisplayEndpoint {
        &self.endpoint
    }

    /// Sends `signal` once. Failures are logged and dropped; the next poll
    /// cycle sends again anyway.
    pub fn send(&self, signal: &SignalState) {
        if let Err(e) = self.send_internal(signal) {
            warn!(
                "--Display--: Failed to send to {}:{}. Details: {}",
                self.endpoint.host, self.endpoint.port, e
            );
        }
    }

    fn resolve(&self) -> Result<SocketAddr, MonitorError> {
        (self.endpoint.host.as_str(), self.endpoint.port)
            .to_socket_addrs()
            .map_err(MonitorError::transmit)?
            .next()
            .ok_or_else(|| MonitorError::transmit(format!("{} resolved to no addresses", self.endpoint.host)))
    }

    fn send_internal(&self, signal: &SignalState) -> Result<usize, MonitorError> {
        let message = signal.encode();
        let target = self.resolve()?;
        let socket = UdpSocket::bind(local_address_for(&target)).map_err(MonitorError::transmit)?;
        socket.set_nonblocking(true).map_err(MonitorError::transmit)?;
        let sent = socket.send_to(&message, target).map_err(MonitorError::transmit)?;
        if sent != message.len() {
            return Err(MonitorError::transmit(format!(
                "only {} of {} bytes went out",
                sent,
                message.len()
            )));
        }
        Ok(sent)
    }
}

/// Ephemeral local address in the same family as `target`.
fn local_address_for(target: &SocketAddr) -> SocketAddr {
    match *target {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}
